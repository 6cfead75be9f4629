use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched when encoding a full URI.
const URI_RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Percent-encode a full URI, keeping its reserved characters.
pub fn encode_uri(input: &str) -> String {
    utf8_percent_encode(input, URI_RESERVED).to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::encode_uri;

    #[test]
    fn keeps_reserved_characters() {
        assert_eq!(
            encode_uri("https://host/path?a=1&b=(2)#frag"),
            "https://host/path?a=1&b=(2)#frag"
        );
    }

    #[test]
    fn encodes_spaces_and_percents() {
        assert_eq!(
            encode_uri("https://img.shields.io/badge/Coverage-Lines--95%, Branches--92%-brightgreen"),
            "https://img.shields.io/badge/Coverage-Lines--95%25,%20Branches--92%25-brightgreen"
        );
    }
}
