//! Article card data as listed in the page's site data.

use std::fmt;

use serde::Deserialize;

/// Calendar date of publication, ordered chronologically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct CardDate {
	pub year: u16,
	pub month: u8,
	pub day: u8,
}

/// Returned for dates that are not `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateParseError(pub String);

impl fmt::Display for DateParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "invalid date {:?}, expected YYYY-MM-DD", self.0)
	}
}

impl std::error::Error for DateParseError {}

impl CardDate {
	pub fn parse(s: &str) -> Result<Self, DateParseError> {
		let err = || DateParseError(s.to_string());
		let mut parts = s.trim().splitn(3, '-');
		let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
			return Err(err());
		};
		if y.len() != 4 || m.len() != 2 || d.len() != 2 {
			return Err(err());
		}
		let year: u16 = y.parse().map_err(|_| err())?;
		let month: u8 = m.parse().map_err(|_| err())?;
		let day: u8 = d.parse().map_err(|_| err())?;
		if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
			return Err(err());
		}
		Ok(Self { year, month, day })
	}
}

impl TryFrom<String> for CardDate {
	type Error = DateParseError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(&value)
	}
}

impl fmt::Display for CardDate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}

/// One article in the listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ArticleCard {
	/// Unique key; also used as the list key when re-rendering.
	pub slug: String,
	pub title: String,
	#[serde(default)]
	pub summary: String,
	pub url: String,
	/// Series identifier matched by the series filter.
	pub series: String,
	#[serde(default)]
	pub tags: Vec<String>,
	pub date: CardDate,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_date() {
		let d = CardDate::parse("2024-06-01").unwrap();
		assert_eq!((d.year, d.month, d.day), (2024, 6, 1));
		assert_eq!(d.to_string(), "2024-06-01");
		assert!(CardDate::parse("2024-01-01").unwrap() < d);

		assert!(CardDate::parse("2024-6-1").is_err());
		assert!(CardDate::parse("2024-13-01").is_err());
		assert!(CardDate::parse("June 1st").is_err());
	}

	#[test]
	fn test_deserialize_card() {
		let json = r#"{
			"slug": "kerberos",
			"title": "Kerberoasting",
			"url": "/articles/kerberos.html",
			"series": "ad",
			"tags": ["windows", "kerberos"],
			"date": "2024-03-15"
		}"#;
		let card: ArticleCard = serde_json::from_str(json).unwrap();

		assert_eq!(card.date, CardDate::parse("2024-03-15").unwrap());
		assert_eq!(card.tags, vec!["windows", "kerberos"]);
		assert!(card.summary.is_empty());
	}

	#[test]
	fn test_invalid_date_rejects_card() {
		let json = r#"{"slug": "a", "title": "A", "url": "/a", "series": "s", "date": "soon"}"#;
		assert!(serde_json::from_str::<ArticleCard>(json).is_err());
	}
}
