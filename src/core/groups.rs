//! Decoding of stored group lists.
//!
//! The CMS keeps a member's or user's groups in a single column. Older rows
//! hold a PHP-serialized array such as `a:2:{i:0;s:1:"1";i:1;s:1:"3";}`,
//! newer ones may hold a JSON array. Anything that does not decode to a
//! sequence yields `None`.

/// Nested arrays deeper than this are treated as malformed.
const MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq)]
enum Serialized {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<(Serialized, Serialized)>),
}

/// Decode a stored group list into group ids.
///
/// String and integer elements are kept in order, integers rendered in
/// decimal. Other element kinds are dropped. Returns `None` when the value
/// is not a sequence at all.
///
/// The value must start with the serialized array itself; leading
/// whitespace makes it undecodable. Bytes after a complete value are
/// ignored.
pub fn decode_groups(raw: &str) -> Option<Vec<String>> {
    if raw.trim().is_empty() {
        return None;
    }

    if raw.starts_with('[') {
        return decode_json(raw);
    }

    match unserialize(raw)? {
        Serialized::Array(entries) => Some(
            entries
                .into_iter()
                .filter_map(|(_, value)| match value {
                    Serialized::Str(s) => Some(s),
                    Serialized::Int(i) => Some(i.to_string()),
                    other => {
                        tracing::debug!("dropping non-scalar group entry: {:?}", other);
                        None
                    }
                })
                .collect(),
        ),
        _ => None,
    }
}

fn decode_json(raw: &str) -> Option<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let items = value.as_array()?;

    Some(
        items
            .iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
                _ => None,
            })
            .collect(),
    )
}

fn unserialize(raw: &str) -> Option<Serialized> {
    let mut parser = Parser {
        input: raw.as_bytes(),
        pos: 0,
    };
    let value = parser.value(0)?;

    if parser.pos != parser.input.len() {
        tracing::debug!(
            "ignoring {} trailing bytes after serialized value",
            parser.input.len() - parser.pos
        );
    }
    Some(value)
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn value(&mut self, depth: usize) -> Option<Serialized> {
        match self.bump()? {
            b'N' => {
                self.expect(b';')?;
                Some(Serialized::Null)
            }
            b'b' => {
                self.expect(b':')?;
                match self.until(b';')? {
                    b"0" => Some(Serialized::Bool(false)),
                    b"1" => Some(Serialized::Bool(true)),
                    _ => None,
                }
            }
            b'i' => {
                self.expect(b':')?;
                let digits = self.until(b';')?;
                std::str::from_utf8(digits).ok()?.parse().ok().map(Serialized::Int)
            }
            b'd' => {
                self.expect(b':')?;
                let digits = self.until(b';')?;
                std::str::from_utf8(digits).ok()?.parse().ok().map(Serialized::Float)
            }
            b's' => {
                self.expect(b':')?;
                let s = self.string_body()?;
                self.expect(b';')?;
                Some(Serialized::Str(s))
            }
            b'a' => {
                if depth >= MAX_DEPTH {
                    return None;
                }
                self.expect(b':')?;
                let count = self.length(b':')?;
                self.expect(b'{')?;

                // count comes from untrusted input, so no preallocation
                let mut entries = Vec::new();
                for _ in 0..count {
                    let key = self.value(depth + 1)?;
                    if !matches!(key, Serialized::Int(_) | Serialized::Str(_)) {
                        return None;
                    }
                    let value = self.value(depth + 1)?;
                    entries.push((key, value));
                }
                self.expect(b'}')?;
                Some(Serialized::Array(entries))
            }
            _ => None,
        }
    }

    /// `<len>:"<len bytes>"`; the length counts bytes, not characters.
    fn string_body(&mut self) -> Option<String> {
        let len = self.length(b':')?;
        self.expect(b'"')?;
        let end = self.pos.checked_add(len)?;
        let bytes = self.input.get(self.pos..end)?;
        self.pos = end;
        self.expect(b'"')?;
        String::from_utf8(bytes.to_vec()).ok()
    }

    fn length(&mut self, terminator: u8) -> Option<usize> {
        let digits = self.until(terminator)?;
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        std::str::from_utf8(digits).ok()?.parse().ok()
    }

    /// Bytes up to `terminator`, consuming the terminator.
    fn until(&mut self, terminator: u8) -> Option<&'a [u8]> {
        let rest = self.input.get(self.pos..)?;
        let offset = rest.iter().position(|&b| b == terminator)?;
        self.pos += offset + 1;
        Some(&rest[..offset])
    }

    fn expect(&mut self, byte: u8) -> Option<()> {
        (self.bump()? == byte).then_some(())
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = *self.input.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }
}
