use crate::error::TitlepatError;
use crate::logging::LogSink;
use crate::rules::rule::{TitleFormat, TitleRule};

/// Characters prefixed with a backslash by [`escape`].
///
/// Space and the ASCII whitespace controls are included so that the
/// `\ AND\ ` rewrite has something to anchor on.
const ESCAPED_CHARS: &[char] = &[
	'(', ')', '[', ']', '{', '}', '?', '*', '+', '-', '|', '^', '$', '\\', '.', '&', '~', '#',
	' ', '\t', '\n', '\r', '\x0b', '\x0c',
];

/// Optional-group rewrites, in the order they must run.
///
/// The escaped period and question mark are matched in their escaped form:
/// this stage expects to see the output of [`escape`].
const OPTIONAL_PUNCTUATION: &[(&str, &str)] = &[
	("'", "([']?)"),
	(",", "([,]?)"),
	("!", "([!]?)"),
	("\\.", "([\\.]?)"),
	("\\?", "([\\?]?)"),
	(":", "([:]?)"),
];

/// Result of compiling a title pattern.
///
/// `pattern` is always usable. When a rule could not be applied, `diagnostic`
/// holds the error and `pattern` is whatever had been built before it.
#[derive(Debug)]
pub struct CompiledPattern {
	pub pattern: String,
	pub diagnostic: Option<TitlepatError>,
}

impl CompiledPattern {
	/// True when every rule was applied.
	pub fn is_complete(&self) -> bool {
		self.diagnostic.is_none()
	}
}

/// Compile a seed title into a match pattern using an ordered rule set.
///
/// Never fails: a malformed rule is reported through `log`, compilation stops
/// there, and the partial pattern is returned with the error attached.
/// Substitutions of a `replace` table declared before a bad entry still apply.
pub fn compile(seed: &str, format: &TitleFormat, log: &dyn LogSink) -> CompiledPattern {
	let mut pattern = seed.to_string();

	for (key, value) in format.entries() {
		let (rule, err) = TitleRule::from_entry_partial(key, value);
		match rule {
			Some(rule) => pattern = rule.apply(&pattern),
			None if err.is_none() => {
				log.debug(&format!("Ignoring unknown title_format rule `{key}`"))
			}
			None => {}
		}
		if let Some(err) = err {
			log.error(&format!(
				"Could not compile title pattern for \"{seed}\": {err}"
			));
			return CompiledPattern {
				pattern,
				diagnostic: Some(err),
			};
		}
	}

	CompiledPattern {
		pattern,
		diagnostic: None,
	}
}

/// Apply already-validated rules left to right.
pub fn apply_rules(seed: &str, rules: &[TitleRule]) -> String {
	rules
		.iter()
		.fold(seed.to_string(), |pattern, rule| rule.apply(&pattern))
}

/// The fixed default pipeline.
///
/// Order matters: punctuation is made optional on the escaped text so the
/// inserted groups are never escaped themselves, and the possessive pass can
/// only find `S\` once spaces have been escaped.
pub fn default_format(text: &str) -> String {
	let upper = text.to_uppercase();
	let unquoted = remove_quotes(&upper);
	let escaped = escape(&unquoted);
	let with_ampersand = escaped.replace("\\ AND\\ ", "\\ (AND|&)\\ ");
	let optional = make_punctuation_optional(&with_ampersand);
	optional.replace("S\\", "([']?)S\\")
}

/// Wrap the six recognized punctuation spellings in optional groups.
pub fn make_punctuation_optional(text: &str) -> String {
	OPTIONAL_PUNCTUATION
		.iter()
		.fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Replace typographic apostrophes and double quotes with typewriter ones.
pub fn remove_quotes(text: &str) -> String {
	text.replace('\u{2019}', "'")
		.replace(['\u{201C}', '\u{201D}'], "\"")
}

/// Escape regex metacharacters and whitespace with a backslash.
///
/// Narrower than [`regex::escape`]: quotes, commas, `!` and `:` stay bare so
/// later stages can find them, while spaces are escaped.
pub fn escape(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len() * 2);
	for c in text.chars() {
		if ESCAPED_CHARS.contains(&c) {
			escaped.push('\\');
		}
		escaped.push(c);
	}
	escaped
}
