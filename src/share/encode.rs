use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped when a value is embedded as a single URI component.
///
/// Everything outside ASCII alphanumerics is escaped except `- _ . ! ~ * ' ( )`,
/// which is the set browsers leave untouched for a query component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;
    use pretty_assertions::assert_eq;

    fn decode_component(encoded: &str) -> Result<String, std::str::Utf8Error> {
        percent_decode_str(encoded)
            .decode_utf8()
            .map(|decoded| decoded.into_owned())
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        assert_eq!(
            encode_component("https://example.com/a?b=1&c=2#top"),
            "https%3A%2F%2Fexample.com%2Fa%3Fb%3D1%26c%3D2%23top"
        );
        assert_eq!(encode_component("a b+c"), "a%20b%2Bc");
    }

    #[test]
    fn test_safe_characters_untouched() {
        assert_eq!(encode_component("AZaz09-_.~!*'()"), "AZaz09-_.~!*'()");
    }

    #[test]
    fn test_non_ascii_uses_uppercase_utf8_escapes() {
        assert_eq!(encode_component("✊"), "%E2%9C%8A");
        assert_eq!(encode_component("زن"), "%D8%B2%D9%86");
    }

    #[test]
    fn test_encoded_values_decode_to_original() {
        let samples = [
            "https://example.com/a?b=1&c=d#frag",
            "Stand with Iran - Woman, Life, Freedom ✊ زن، زندگی، آزادی",
            "100% = done?",
            "",
        ];
        for sample in samples {
            let encoded = encode_component(sample);
            assert!(encoded.chars().all(|c| c.is_ascii() && c != ' '));
            assert_eq!(decode_component(&encoded).unwrap(), sample);
        }
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(decode_component("%FF%FE").is_err());
    }
}
