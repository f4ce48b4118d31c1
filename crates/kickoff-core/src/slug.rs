//! Package-name slugs

/// Build a strict, lowercase package slug from free text
///
/// ASCII letters and digits are kept, common Latin letters with diacritics
/// are transliterated to their base form, and every other run of characters
/// becomes a single `-`. Leading and trailing separators are dropped.
///
/// # Examples
/// - `My App` -> `my-app`
/// - `Crème Brûlée!` -> `creme-brulee`
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        let lowered = ch.to_lowercase().next().unwrap_or(ch);

        let replacement: Option<&str> = if lowered.is_ascii_alphanumeric() {
            None
        } else {
            transliterate(lowered)
        };

        if lowered.is_ascii_alphanumeric() || replacement.is_some() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            match replacement {
                Some(text) => slug.push_str(text),
                None => slug.push(lowered),
            }
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// ASCII spelling of a lowercase Latin letter with a diacritic
fn transliterate(ch: char) -> Option<&'static str> {
    let text = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' | 'ģ' | 'ĝ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'ķ' => "k",
        'ł' | 'ľ' | 'ļ' | 'ĺ' => "l",
        'ñ' | 'ń' | 'ň' | 'ņ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ř' => "r",
        'ś' | 'š' | 'ş' | 'ș' => "s",
        'ß' => "ss",
        'ť' | 'ţ' | 'ț' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_spaces() {
        assert_eq!(slugify("My App"), "my-app");
        assert_eq!(slugify("  Acme   Tool  "), "acme-tool");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("my_app.js"), "my-app-js");
        assert_eq!(slugify("--already-slugged--"), "already-slugged");
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("Straße"), "strasse");
        assert_eq!(slugify("Ærøskøbing"), "aeroskobing");
    }

    #[test]
    fn test_slugify_drops_unrepresentable() {
        assert_eq!(slugify("app ✨ 2"), "app-2");
        assert_eq!(slugify("日本"), "");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Version 2 Beta"), "version-2-beta");
    }
}
