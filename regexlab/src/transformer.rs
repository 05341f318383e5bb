use crate::regex::Regex;

/// Result of the substitution of a pattern in a text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformResult {
    /// Text after every substitution.
    pub output_text: String,

    /// Number of substitutions performed.
    pub count: usize,
}

/// Replace every non-overlapping match of the regex by the expansion of the template.
///
/// The template can reference groups with `$1`, `${1}` or `${name}`. `$$` is a
/// literal `$`. A reference to a group that does not exist or did not participate
/// in the match expands to an empty string.
pub(crate) fn substitute_all(text: &str, regex: &Regex, template: &str) -> TransformResult {
    let mut output_text = String::with_capacity(text.len());
    let mut last_end = 0;
    let mut count = 0;

    for caps in regex.as_meta().captures_iter(text) {
        let Some(mat) = caps.get_match() else {
            continue;
        };

        output_text.push_str(&text[last_end..mat.start()]);
        caps.interpolate_string_into(text, template, &mut output_text);
        last_end = mat.end();
        count += 1;
    }
    output_text.push_str(&text[last_end..]);

    TransformResult { output_text, count }
}
