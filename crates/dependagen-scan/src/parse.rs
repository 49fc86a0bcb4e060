use crate::ScanRules;
use std::io::BufRead;

/// What a project file declares up to (and including) its first versioned package reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManifestFacts {
    pub target_framework: Option<String>,
    /// `None` when the reference line has no usable `Include="..."` name.
    pub package_name: Option<String>,
}

/// Text between the framework markers, if it names a `net*` framework.
pub fn extract_target_framework<'a>(line: &'a str, rules: &ScanRules) -> Option<&'a str> {
    let start = line.find(rules.framework_start.as_str())?;
    let end = line.find(rules.framework_end.as_str())?;
    let value_start = start + rules.framework_start.len();
    if end < value_start {
        return None;
    }
    let value = &line[value_start..end];
    value
        .starts_with(rules.framework_prefix.as_str())
        .then_some(value)
}

/// Text between `PackageReference Include="` and the next `"`. Empty names yield `None`.
pub fn extract_package_name<'a>(line: &'a str, rules: &ScanRules) -> Option<&'a str> {
    let start = line.find(rules.package_include.as_str())? + rules.package_include.len();
    let rest = &line[start..];
    let end = rest.find('"')?;
    (end > 0).then(|| &rest[..end])
}

/// Read lines until the first versioned package reference and stop there.
///
/// Returns `Ok(None)` when the file never declares one. Bytes that are not valid UTF-8 are
/// replaced rather than treated as an error.
pub fn scan_lines<R: BufRead>(
    mut reader: R,
    rules: &ScanRules,
) -> std::io::Result<Option<ManifestFacts>> {
    let mut target_framework: Option<String> = None;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']);

        if target_framework.is_none() {
            target_framework = extract_target_framework(line, rules).map(str::to_string);
        }

        if rules.versioned_reference.is_match(line) {
            return Ok(Some(ManifestFacts {
                target_framework,
                package_name: extract_package_name(line, rules).map(str::to_string),
            }));
        }
    }
}
