// core/src/query/page.rs

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

/// A 1-indexed page window over an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
  pub page: u64,
  pub per_page: u32,
}

impl Default for Pagination {
  fn default() -> Self {
    Self {
      page: 1,
      per_page: DEFAULT_PER_PAGE,
    }
  }
}

impl Pagination {
  /// Reads `page` and `per` the way form parameters are usually read: leading
  /// digits count (`"10abc"` is 10), anything else is treated as absent.
  ///
  /// - `per` above `MAX_PER_PAGE` is capped; absent or non-positive is `DEFAULT_PER_PAGE`.
  /// - `page` absent or non-positive is 1.
  pub fn from_params(page: Option<&str>, per: Option<&str>) -> Self {
    let page = match page.and_then(leading_integer) {
      Some(n) if n > 0 => n as u64,
      _ => 1,
    };
    let per_page = match per.and_then(leading_integer) {
      Some(n) if n > i64::from(MAX_PER_PAGE) => MAX_PER_PAGE,
      Some(n) if n > 0 => n as u32,
      _ => DEFAULT_PER_PAGE,
    };
    Self { page, per_page }
  }

  pub fn limit(&self) -> i64 {
    i64::from(self.per_page)
  }

  /// Rows to skip. Saturates at `i64::MAX` for absurd page numbers.
  pub fn offset(&self) -> i64 {
    let skipped = (self.page - 1).saturating_mul(u64::from(self.per_page));
    i64::try_from(skipped).unwrap_or(i64::MAX)
  }
}

/// Optional sign followed by at least one digit; trailing garbage is ignored.
/// Values too large for `i64` saturate.
fn leading_integer(raw: &str) -> Option<i64> {
  let raw = raw.trim();
  let (negative, digits) = match raw.as_bytes().first() {
    Some(b'-') => (true, &raw[1..]),
    Some(b'+') => (false, &raw[1..]),
    _ => (false, raw),
  };
  let end = digits.bytes().take_while(u8::is_ascii_digit).count();
  if end == 0 {
    return None;
  }
  let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
  Some(if negative { -magnitude } else { magnitude })
}
