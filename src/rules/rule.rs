use crate::error::{Result, TitlepatError};
use crate::rules::compiler::{default_format, make_punctuation_optional, remove_quotes};
use serde::Deserialize;
use toml::{Table, Value};

/// Ordered set of title formatting rules, as authored in a series config.
///
/// Backed by an insertion-ordered table: each rule appears at most once and
/// runs in the order it was declared.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TitleFormat(Table);

impl TitleFormat {
	/// Parse a TOML fragment holding the rules at top level.
	pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
		toml::from_str(content)
	}

	/// Raw entries in declaration order.
	pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value))
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Convert every entry up front, failing on the first malformed one.
	///
	/// Unrecognized keys are skipped.
	pub fn rules(&self) -> Result<Vec<TitleRule>> {
		let mut rules = Vec::new();
		for (key, value) in self.entries() {
			if let Some(rule) = TitleRule::from_entry(key, value)? {
				rules.push(rule);
			}
		}
		Ok(rules)
	}
}

/// A single recognized formatting directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleRule {
	/// Uppercase, normalize quotes, escape, and loosen punctuation.
	ApplyDefaultFormat(bool),

	/// Wrap `'`, `,`, `!`, `\.`, `\?` and `:` in optional groups.
	MakePunctuationOptional(bool),

	/// Text placed in front of the pattern.
	Prepend(String),

	/// Text placed after the pattern.
	Append(String),

	/// Replace typographic quotes with typewriter ones.
	RemoveQuotes(bool),

	/// Literal substitutions, applied one after another.
	Replace(Vec<(String, String)>),
}

impl TitleRule {
	/// Build a rule from one `title_format` entry.
	///
	/// Returns `Ok(None)` for keys this compiler does not know about.
	pub fn from_entry(key: &str, value: &Value) -> Result<Option<Self>> {
		match TitleRule::from_entry_partial(key, value) {
			(_, Some(err)) => Err(err),
			(rule, None) => Ok(rule),
		}
	}

	/// Like [`TitleRule::from_entry`], but keeps what is usable of a malformed
	/// `replace` table.
	///
	/// On a bad substitution the rule holds the pairs declared before it, next
	/// to the error. Other malformed entries yield no rule.
	pub fn from_entry_partial(key: &str, value: &Value) -> (Option<Self>, Option<TitlepatError>) {
		let rule = match key {
			"apply_default_format" => TitleRule::ApplyDefaultFormat(is_true(value)),
			"make_ponctuation_optional" => TitleRule::MakePunctuationOptional(is_true(value)),
			"remove_quotes" => TitleRule::RemoveQuotes(is_true(value)),
			"prepend" | "append" => match expect_str(key, value) {
				Ok(text) if key == "prepend" => TitleRule::Prepend(text.to_string()),
				Ok(text) => TitleRule::Append(text.to_string()),
				Err(err) => return (None, Some(err)),
			},
			"replace" => {
				let Value::Table(table) = value else {
					let err = invalid(
						key,
						format!("expected a table of substitutions, found {}", value.type_str()),
					);
					return (None, Some(err));
				};
				let mut pairs = Vec::with_capacity(table.len());
				for (from, to) in table {
					let Some(to_str) = to.as_str() else {
						let err = invalid(
							key,
							format!("substitution for `{from}` must be a string, found {}", to.type_str()),
						);
						return (Some(TitleRule::Replace(pairs)), Some(err));
					};
					pairs.push((from.clone(), to_str.to_string()));
				}
				TitleRule::Replace(pairs)
			}
			_ => return (None, None),
		};
		(Some(rule), None)
	}

	/// Apply this rule to the accumulated pattern.
	pub fn apply(&self, pattern: &str) -> String {
		match self {
			TitleRule::ApplyDefaultFormat(true) => default_format(pattern),
			TitleRule::MakePunctuationOptional(true) => make_punctuation_optional(pattern),
			TitleRule::RemoveQuotes(true) => remove_quotes(pattern),
			TitleRule::Prepend(prefix) => format!("{prefix}{pattern}"),
			TitleRule::Append(suffix) => format!("{pattern}{suffix}"),
			TitleRule::Replace(pairs) => pairs
				.iter()
				.fold(pattern.to_string(), |acc, (from, to)| acc.replace(from, to)),
			TitleRule::ApplyDefaultFormat(false)
			| TitleRule::MakePunctuationOptional(false)
			| TitleRule::RemoveQuotes(false) => pattern.to_string(),
		}
	}
}

// Only a literal boolean `true` switches a stage on.
fn is_true(value: &Value) -> bool {
	matches!(value, Value::Boolean(true))
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
	value
		.as_str()
		.ok_or_else(|| invalid(key, format!("expected a string, found {}", value.type_str())))
}

fn invalid(rule: &str, reason: String) -> TitlepatError {
	TitlepatError::InvalidRule {
		rule: rule.to_string(),
		reason,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_entries_keep_declaration_order() {
		let format = TitleFormat::parse(
			r#"
append = "$"
remove_quotes = true
prepend = "^"
apply_default_format = true
"#,
		)
		.unwrap();

		let keys: Vec<_> = format.entries().map(|(key, _)| key).collect();
		assert_eq!(
			keys,
			vec!["append", "remove_quotes", "prepend", "apply_default_format"]
		);
	}

	#[test]
	fn test_from_entry_unknown_key_is_ignored() {
		let rule = TitleRule::from_entry("shout", &Value::Boolean(true)).unwrap();
		assert!(rule.is_none());
	}

	#[test]
	fn test_from_entry_boolean_rules() {
		assert_eq!(
			TitleRule::from_entry("apply_default_format", &Value::Boolean(true)).unwrap(),
			Some(TitleRule::ApplyDefaultFormat(true))
		);
		assert_eq!(
			TitleRule::from_entry("remove_quotes", &Value::Boolean(false)).unwrap(),
			Some(TitleRule::RemoveQuotes(false))
		);
		// Anything other than a literal `true` leaves the stage off.
		assert_eq!(
			TitleRule::from_entry("make_ponctuation_optional", &Value::String("true".into()))
				.unwrap(),
			Some(TitleRule::MakePunctuationOptional(false))
		);
	}

	#[test]
	fn test_from_entry_prepend_requires_string() {
		let result = TitleRule::from_entry("prepend", &Value::Integer(3));
		match result.unwrap_err() {
			TitlepatError::InvalidRule { rule, reason } => {
				assert_eq!(rule, "prepend");
				assert!(reason.contains("integer"));
			}
			other => panic!("Expected InvalidRule error, got {other:?}"),
		}
	}

	#[test]
	fn test_from_entry_replace_keeps_order() {
		let format = TitleFormat::parse(
			r#"
[replace]
"Part 2" = "Part II"
"Part 1" = "Part I"
"#,
		)
		.unwrap();

		let rules = format.rules().unwrap();
		assert_eq!(
			rules,
			vec![TitleRule::Replace(vec![
				("Part 2".to_string(), "Part II".to_string()),
				("Part 1".to_string(), "Part I".to_string()),
			])]
		);
	}

	#[test]
	fn test_from_entry_replace_rejects_non_table() {
		let result = TitleRule::from_entry("replace", &Value::String("A".into()));
		assert!(matches!(
			result,
			Err(TitlepatError::InvalidRule { ref rule, .. }) if rule == "replace"
		));
	}

	#[test]
	fn test_from_entry_replace_rejects_non_string_value() {
		let format = TitleFormat::parse("replace = { A = 1 }").unwrap();
		let err = format.rules().unwrap_err();
		assert!(err.to_string().contains("replace"));
	}

	#[test]
	fn test_from_entry_partial_keeps_valid_replace_prefix() {
		let format = TitleFormat::parse(r#"replace = { A = "B", C = 1, D = "E" }"#).unwrap();
		let (key, value) = format.entries().next().unwrap();

		let (rule, err) = TitleRule::from_entry_partial(key, value);
		assert_eq!(
			rule,
			Some(TitleRule::Replace(vec![("A".to_string(), "B".to_string())]))
		);
		assert!(matches!(err, Some(TitlepatError::InvalidRule { .. })));
	}

	#[test]
	fn test_from_entry_partial_bad_prepend_has_no_rule() {
		let (rule, err) = TitleRule::from_entry_partial("prepend", &Value::Boolean(true));
		assert!(rule.is_none());
		assert!(err.is_some());
	}

	#[test]
	fn test_apply_disabled_stage_is_identity() {
		assert_eq!(
			TitleRule::ApplyDefaultFormat(false).apply("Bob's Burgers"),
			"Bob's Burgers"
		);
		assert_eq!(TitleRule::RemoveQuotes(false).apply("’"), "’");
	}

	#[test]
	fn test_apply_prepend_and_append() {
		assert_eq!(TitleRule::Prepend("^".into()).apply("TITLE"), "^TITLE");
		assert_eq!(TitleRule::Append("$".into()).apply("TITLE"), "TITLE$");
	}

	#[test]
	fn test_apply_empty_replace_pattern_interleaves() {
		let rule = TitleRule::Replace(vec![(String::new(), "-".into())]);
		assert_eq!(rule.apply("ab"), "-a-b-");
	}
}
