use crate::{defaults, model::DependagenConfigV1};
use anyhow::Context;
use camino::Utf8PathBuf;
use dependagen_types::IgnoreSource;
use std::time::Duration;

/// CLI-level overrides; they win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub ignore_url: Option<String>,
    pub ignore_file: Option<Utf8PathBuf>,
    pub timeout_secs: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::Daily => "daily",
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub interval: Interval,
    /// Only set for weekly schedules.
    pub day: Option<Weekday>,
}

/// Effective settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub ignore_source: IgnoreSource,
    pub timeout: Duration,
    pub tool_name: String,
    pub ecosystem: String,
    pub schedule: Schedule,
    pub open_pull_requests_limit: u32,
}

pub fn resolve_config(
    cfg: DependagenConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = defaults::builtin();

    // Ignore source: a local file beats a URL, CLI beats config.
    if let Some(path) = overrides.ignore_file {
        effective.ignore_source = IgnoreSource::File(path);
    } else if let Some(url) = overrides.ignore_url {
        effective.ignore_source = IgnoreSource::Url(url);
    } else if let Some(path) = cfg.ignore_file {
        effective.ignore_source = IgnoreSource::File(Utf8PathBuf::from(path));
    } else if let Some(url) = cfg.ignore_url {
        effective.ignore_source = IgnoreSource::Url(url);
    }
    if let IgnoreSource::Url(url) = &effective.ignore_source
        && !(url.starts_with("https://") || url.starts_with("http://"))
    {
        anyhow::bail!("ignore_url must be an http(s) URL: {url}");
    }

    if let Some(secs) = overrides.timeout_secs.or(cfg.timeout_secs) {
        if secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        effective.timeout = Duration::from_secs(secs);
    }

    if let Some(name) = cfg.tool_name {
        effective.tool_name = non_empty("tool_name", name)?;
    }
    if let Some(ecosystem) = cfg.ecosystem {
        effective.ecosystem = non_empty("ecosystem", ecosystem)?;
    }
    if let Some(limit) = cfg.open_pull_requests_limit {
        effective.open_pull_requests_limit = limit;
    }

    // Schedule
    if let Some(interval) = cfg.schedule.interval.as_deref() {
        effective.schedule.interval = parse_interval(interval)?;
    }
    effective.schedule.day = match (effective.schedule.interval, cfg.schedule.day.as_deref()) {
        (Interval::Weekly, Some(day)) => {
            Some(parse_weekday(day).context("invalid schedule.day")?)
        }
        (Interval::Weekly, None) => effective.schedule.day,
        (other, Some(_)) => anyhow::bail!(
            "schedule.day only applies to weekly updates (interval is {})",
            other.as_str()
        ),
        (_, None) => None,
    };

    Ok(effective)
}

fn non_empty(field: &str, value: String) -> anyhow::Result<String> {
    if value.trim().is_empty() {
        anyhow::bail!("{field} must not be empty");
    }
    Ok(value)
}

fn parse_interval(v: &str) -> anyhow::Result<Interval> {
    match v {
        "daily" => Ok(Interval::Daily),
        "weekly" => Ok(Interval::Weekly),
        "monthly" => Ok(Interval::Monthly),
        other => anyhow::bail!("unknown schedule interval: {other} (expected daily|weekly|monthly)"),
    }
}

fn parse_weekday(v: &str) -> anyhow::Result<Weekday> {
    match v {
        "monday" => Ok(Weekday::Monday),
        "tuesday" => Ok(Weekday::Tuesday),
        "wednesday" => Ok(Weekday::Wednesday),
        "thursday" => Ok(Weekday::Thursday),
        "friday" => Ok(Weekday::Friday),
        "saturday" => Ok(Weekday::Saturday),
        "sunday" => Ok(Weekday::Sunday),
        other => anyhow::bail!("unknown weekday: {other} (expected monday..sunday)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScheduleConfig;

    #[test]
    fn empty_config_resolves_to_builtin() {
        let resolved =
            resolve_config(DependagenConfigV1::default(), Overrides::default()).expect("resolve");
        assert_eq!(resolved, defaults::builtin());
        assert_eq!(
            resolved.ignore_source,
            IgnoreSource::Url(defaults::DEFAULT_IGNORE_URL.to_string())
        );
        assert_eq!(resolved.schedule.interval, Interval::Weekly);
        assert_eq!(resolved.schedule.day, Some(Weekday::Wednesday));
        assert_eq!(resolved.open_pull_requests_limit, 5);
    }

    #[test]
    fn cli_overrides_beat_config_file() {
        let cfg = DependagenConfigV1 {
            ignore_url: Some("https://config.example/ignore.json".to_string()),
            timeout_secs: Some(10),
            ..Default::default()
        };
        let overrides = Overrides {
            ignore_url: Some("https://cli.example/ignore.json".to_string()),
            ignore_file: None,
            timeout_secs: Some(3),
        };

        let resolved = resolve_config(cfg, overrides).expect("resolve");
        assert_eq!(
            resolved.ignore_source,
            IgnoreSource::Url("https://cli.example/ignore.json".to_string())
        );
        assert_eq!(resolved.timeout, Duration::from_secs(3));
    }

    #[test]
    fn ignore_file_beats_ignore_url() {
        let cfg = DependagenConfigV1 {
            ignore_url: Some("https://config.example/ignore.json".to_string()),
            ignore_file: Some("ignore.json".to_string()),
            ..Default::default()
        };
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(
            resolved.ignore_source,
            IgnoreSource::File(Utf8PathBuf::from("ignore.json"))
        );
    }

    #[test]
    fn non_http_url_is_rejected() {
        let overrides = Overrides {
            ignore_url: Some("ftp://example/ignore.json".to_string()),
            ..Default::default()
        };
        let err = resolve_config(DependagenConfigV1::default(), overrides).unwrap_err();
        assert!(err.to_string().contains("http(s) URL"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let overrides = Overrides {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(resolve_config(DependagenConfigV1::default(), overrides).is_err());
    }

    #[test]
    fn weekly_day_can_be_changed() {
        let cfg = DependagenConfigV1 {
            schedule: ScheduleConfig {
                interval: None,
                day: Some("monday".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved.schedule.day, Some(Weekday::Monday));
    }

    #[test]
    fn non_weekly_interval_drops_default_day() {
        let cfg = DependagenConfigV1 {
            schedule: ScheduleConfig {
                interval: Some("daily".to_string()),
                day: None,
            },
            ..Default::default()
        };
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved.schedule.interval, Interval::Daily);
        assert_eq!(resolved.schedule.day, None);
    }

    #[test]
    fn day_with_monthly_interval_is_rejected() {
        let cfg = DependagenConfigV1 {
            schedule: ScheduleConfig {
                interval: Some("monthly".to_string()),
                day: Some("friday".to_string()),
            },
            ..Default::default()
        };
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("only applies to weekly"));
    }

    #[test]
    fn unknown_values_are_rejected() {
        let cfg = DependagenConfigV1 {
            schedule: ScheduleConfig {
                interval: Some("hourly".to_string()),
                day: None,
            },
            ..Default::default()
        };
        assert!(resolve_config(cfg, Overrides::default()).is_err());

        let cfg = DependagenConfigV1 {
            schedule: ScheduleConfig {
                interval: None,
                day: Some("Wednesday".to_string()),
            },
            ..Default::default()
        };
        assert!(resolve_config(cfg, Overrides::default()).is_err());
    }
}
