use chrono::DateTime;
use chrono_tz::Tz;

const DISPLAY_TIMEZONE_STORAGE_KEY:
  &str = "tally.display_timezone";

pub fn display_timezone() -> Tz {
  let stored = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(
          DISPLAY_TIMEZONE_STORAGE_KEY
        )
        .ok()
        .flatten()
    });

  parse_timezone(stored.as_deref())
}

fn parse_timezone(
  raw: Option<&str>
) -> Tz {
  let Some(raw) = raw else {
    return chrono_tz::UTC;
  };

  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return chrono_tz::UTC;
  }

  match trimmed.parse::<Tz>() {
    | Ok(timezone) => timezone,
    | Err(_) => {
      tracing::warn!(
        timezone = trimmed,
        "unknown display timezone; \
         falling back to UTC"
      );
      chrono_tz::UTC
    }
  }
}

/// Locale-default date and time representations joined by
/// one space; missing or blank timestamps render empty.
pub fn format_timestamp(
  raw: Option<&str>,
  timezone: Tz
) -> String {
  let Some(raw) = raw else {
    return String::new();
  };

  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return String::new();
  }

  match DateTime::parse_from_rfc3339(
    trimmed
  ) {
    | Ok(parsed) => parsed
      .with_timezone(&timezone)
      .format("%x %X")
      .to_string(),
    | Err(error) => {
      tracing::warn!(
        error = %error,
        raw = trimmed,
        "unparsable timestamp; \
         rendering raw value"
      );
      trimmed.to_string()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_timestamps_render_empty()
  {
    assert_eq!(
      format_timestamp(
        None,
        chrono_tz::UTC
      ),
      ""
    );
    assert_eq!(
      format_timestamp(
        Some("   "),
        chrono_tz::UTC
      ),
      ""
    );
  }

  #[test]
  fn renders_date_space_time() {
    let rendered = format_timestamp(
      Some(
        "2026-02-20T09:30:00+00:00"
      ),
      chrono_tz::UTC
    );

    assert_eq!(
      rendered,
      "02/20/26 09:30:00"
    );
  }

  #[test]
  fn converts_into_display_timezone()
  {
    let berlin = parse_timezone(Some(
      "Europe/Berlin"
    ));

    assert_eq!(
      format_timestamp(
        Some(
          "2026-02-20T09:30:00+00:00"
        ),
        berlin
      ),
      "02/20/26 10:30:00"
    );
  }

  #[test]
  fn unknown_timezone_falls_back_to_utc()
  {
    assert_eq!(
      parse_timezone(Some(
        "Mars/Olympus_Mons"
      )),
      chrono_tz::UTC
    );
    assert_eq!(
      parse_timezone(None),
      chrono_tz::UTC
    );
    assert_eq!(
      parse_timezone(Some("  ")),
      chrono_tz::UTC
    );
  }
}
