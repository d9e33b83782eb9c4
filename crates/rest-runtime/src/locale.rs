#![forbid(unsafe_code)]

//! Clock convention detection from POSIX locale variables.
//!
//! `LC_ALL` overrides `LC_TIME`, which overrides `LANG`; the first non-empty
//! one wins. The region decides the hour cycle, except for a few
//! language and region pairs that differ from the rest of their region
//! (`fr_CA` is 24-hour). `C`, `POSIX`, and unparseable values fall back to
//! 24-hour.

/// Variables consulted, highest precedence first.
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Regions whose default time format is 12-hour with AM/PM.
const TWELVE_HOUR_REGIONS: &[&str] = &[
    "US", "CA", "AU", "NZ", "IN", "PH", "PK", "BD", "EG", "SA", "MY", "JO", "IQ", "SY", "YE",
    "SD", "LY", "KW", "OM", "QA", "BH", "AE",
];

/// Language and region pairs that use 24-hour time inside a 12-hour region.
const TWENTY_FOUR_HOUR_EXCEPTIONS: &[(&str, &str)] = &[("fr", "CA")];

/// How hours are counted on a clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum HourCycle {
    /// `00`-`23`.
    #[default]
    H23,
    /// `1`-`12` with an AM/PM marker.
    H12,
}

/// Language and optional region parsed from a locale string such as
/// `en_US.UTF-8@euro`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub language: String,
    pub region: Option<String>,
}

impl Locale {
    /// Parse `language[_REGION][.codeset][@modifier]`; BCP 47 dashes also work.
    pub fn parse(raw: &str) -> Option<Self> {
        let base = raw.split(['.', '@']).next()?.trim();
        if base.is_empty() || base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
            return None;
        }
        let mut parts = base.split(['_', '-']);
        let language = parts.next()?.to_ascii_lowercase();
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let region = parts
            .next()
            .filter(|r| !r.is_empty())
            .map(str::to_ascii_uppercase);
        Some(Self { language, region })
    }

    pub fn hour_cycle(&self) -> HourCycle {
        let Some(region) = self.region.as_deref() else {
            return HourCycle::H23;
        };
        let exception = TWENTY_FOUR_HOUR_EXCEPTIONS
            .iter()
            .any(|&(language, r)| language == self.language && r == region);
        if TWELVE_HOUR_REGIONS.contains(&region) && !exception {
            HourCycle::H12
        } else {
            HourCycle::H23
        }
    }
}

/// Hour cycle for a raw locale string.
pub fn hour_cycle_for(raw: &str) -> HourCycle {
    Locale::parse(raw).map_or(HourCycle::H23, |l| l.hour_cycle())
}

/// Hour cycle from a variable lookup, following [`LOCALE_VARS`] precedence.
///
/// Taking the lookup as a function keeps tests off the process environment.
pub fn detect_with<F>(lookup: F) -> HourCycle
where
    F: Fn(&str) -> Option<String>,
{
    let raw = LOCALE_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.trim().is_empty());
    let cycle = raw.as_deref().map_or(HourCycle::H23, hour_cycle_for);
    tracing::debug!(locale = raw.as_deref().unwrap_or("<unset>"), ?cycle, "clock detected");
    cycle
}
