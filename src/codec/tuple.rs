//! Fixed-length heterogeneous tuple codec.

use super::Codec;
use super::array::parse_string_array;
use super::error::{CodecError, ContainerKind};

/// A tuple of codecs, one per position.
///
/// Implemented for tuples of one to eight codecs.
pub trait TupleCodecs {
    type Value;

    /// Number of positions in the tuple.
    const LEN: usize;

    fn encode_all(&self, value: &Self::Value) -> Result<Vec<String>, CodecError>;

    /// Decode exactly [`Self::LEN`] entries, pairing them with codecs by index.
    fn decode_all(&self, entries: Vec<String>) -> Result<Self::Value, CodecError>;
}

macro_rules! impl_tuple_codecs {
    ($len:literal => $($codec:ident $idx:tt),+) => {
        impl<$($codec: Codec),+> TupleCodecs for ($($codec,)+) {
            type Value = ($(<$codec as Codec>::Value,)+);

            const LEN: usize = $len;

            fn encode_all(&self, value: &Self::Value) -> Result<Vec<String>, CodecError> {
                Ok(vec![$(self.$idx.encode(&value.$idx)?),+])
            }

            fn decode_all(&self, entries: Vec<String>) -> Result<Self::Value, CodecError> {
                let found = entries.len();
                let mut entries = entries.into_iter();
                Ok(($(
                    {
                        let entry = entries
                            .next()
                            .ok_or_else(|| length_mismatch(Self::LEN, found))?;
                        self.$idx
                            .decode(&entry)
                            .map_err(|source| CodecError::element(ContainerKind::Tuple, $idx, source))?
                    },
                )+))
            }
        }
    };
}

impl_tuple_codecs!(1 => A 0);
impl_tuple_codecs!(2 => A 0, B 1);
impl_tuple_codecs!(3 => A 0, B 1, C 2);
impl_tuple_codecs!(4 => A 0, B 1, C 2, D 3);
impl_tuple_codecs!(5 => A 0, B 1, C 2, D 3, E 4);
impl_tuple_codecs!(6 => A 0, B 1, C 2, D 3, E 4, F 5);
impl_tuple_codecs!(7 => A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_tuple_codecs!(8 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

fn length_mismatch(expected: usize, found: usize) -> CodecError {
    CodecError::container(
        ContainerKind::Tuple,
        format!("expected {} elements, found {}", expected, found),
    )
}

/// Codec for a fixed-length tuple whose positions each have their own codec.
///
/// Stored like [`ArrayOf`](super::ArrayOf): a JSON array of the positional
/// encodings. A length mismatch is a container error; a position that fails
/// its codec is an element error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TupleOf<T> {
    codecs: T,
}

impl<T> TupleOf<T> {
    pub fn new(codecs: T) -> Self {
        Self { codecs }
    }
}

impl<T: TupleCodecs> Codec for TupleOf<T> {
    type Value = T::Value;

    fn encode(&self, value: &T::Value) -> Result<String, CodecError> {
        let encoded = self.codecs.encode_all(value)?;
        Ok(serde_json::to_string(&encoded)?)
    }

    fn decode(&self, raw: &str) -> Result<T::Value, CodecError> {
        let entries = parse_string_array(raw, ContainerKind::Tuple)?;
        if entries.len() != T::LEN {
            return Err(length_mismatch(T::LEN, entries.len()));
        }
        self.codecs.decode_all(entries)
    }
}
