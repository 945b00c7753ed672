use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use primcast_base::{Error, Kind, SyntaxError};
use std::borrow::Cow;

/// How a text matched by a layout pattern becomes a UTC time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Form {
    /// Date, time and UTC offset.
    Zoned,
    /// Like [`Form::Zoned`], but a trailing `Z` is also accepted as zero offset.
    ZuluOrOffset,
    /// Date and time without offset, read as UTC.
    Naive,
    /// Date only, at midnight UTC.
    Date,
    /// Time of day only, on January 1 of year 0.
    Clock,
}

/// Text timestamp layout, a [`chrono::format::strftime`] pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub pattern: Cow<'static, str>,
    pub form: Form,
}

impl Layout {
    pub const fn new(pattern: &'static str, form: Form) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            form,
        }
    }

    /// Parse the whole `text`, returns `None` if it doesn't match.
    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let pattern = self.pattern.as_ref();
        match self.form {
            Form::Zoned => DateTime::parse_from_str(text, pattern).ok().map(|t| t.with_timezone(&Utc)),
            Form::ZuluOrOffset => {
                let text = match text.strip_suffix('Z') {
                    Some(rest) => Cow::Owned(format!("{rest}+00:00")),
                    None => Cow::Borrowed(text),
                };
                DateTime::parse_from_str(&text, pattern).ok().map(|t| t.with_timezone(&Utc))
            }
            Form::Naive => NaiveDateTime::parse_from_str(text, pattern).ok().map(|t| t.and_utc()),
            Form::Date => NaiveDate::parse_from_str(text, pattern)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|t| t.and_utc()),
            Form::Clock => {
                let time = NaiveTime::parse_from_str(text, pattern).ok()?;
                NaiveDate::from_ymd_opt(0, 1, 1).map(|d| d.and_time(time).and_utc())
            }
        }
    }
}

/// Known layouts, tried in this order.
static DEFAULT_LAYOUTS: [Layout; 11] = [
    Layout::new("%Y-%m-%dT%H:%M:%S%.f%z%Z", Form::Zoned),
    Layout::new("%Y-%m-%dT%H:%M:%S%.f%z", Form::Zoned),
    Layout::new("%Y-%m-%dT%H:%M:%S%.f", Form::Naive),
    Layout::new("%Y-%m-%dT%H:%M:%S", Form::Naive),
    Layout::new("%Y-%m-%d", Form::Date),
    Layout::new("%Y-%m-%d %H:%M:%S", Form::Naive),
    Layout::new("%H:%M:%S", Form::Clock),
    Layout::new("%b %d, %Y", Form::Date),
    Layout::new("%Y-%m-%d %H:%M", Form::Naive),
    Layout::new("%Y-%m-%d %H:%M:%S%.f%z", Form::Zoned),
    Layout::new("%Y-%m-%d %H:%M:%S%.f%:z", Form::ZuluOrOffset),
];

fn parse_with(text: &str, layouts: &[Layout]) -> Result<DateTime<Utc>, Error> {
    layouts
        .iter()
        .find_map(|layout| layout.parse(text))
        .ok_or_else(|| Error::from(SyntaxError::Time(text.to_owned())).to(Kind::Time))
}

/// Ordered list of timestamp layouts. The first one that matches wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layouts {
    items: Vec<Layout>,
}

impl Layouts {
    pub fn new(items: Vec<Layout>) -> Self {
        Self { items }
    }
    /// Append a layout with the lowest priority.
    pub fn push(&mut self, layout: Layout) {
        self.items.push(layout);
    }
    pub fn iter(&self) -> impl Iterator<Item = &Layout> {
        self.items.iter()
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn parse(&self, text: &str) -> Result<DateTime<Utc>, Error> {
        parse_with(text, &self.items)
    }
}

impl Default for Layouts {
    fn default() -> Self {
        Self::new(DEFAULT_LAYOUTS.to_vec())
    }
}

/// Parse text timestamp using the default layouts.
pub fn parse_time(text: &str) -> Result<DateTime<Utc>, Error> {
    parse_with(text, &DEFAULT_LAYOUTS)
}
