//! Closed key sets binding logical key names to codecs.

use crate::codec::Codec;

/// A closed set of keys, each bound to its own codec.
///
/// The spec value owns the codec instances; the keys themselves are marker
/// types implementing [`SpecKey`]. Usually declared with
/// [`typed_spec!`](crate::typed_spec).
pub trait Spec {
    /// Logical names of every key in the spec.
    const KEYS: &'static [&'static str];
}

/// One key of a [`Spec`].
///
/// Only keys whose `Spec` matches a storage's spec can be used with that
/// storage, so reading an unregistered key does not compile.
pub trait SpecKey {
    type Spec: Spec;
    type Codec: Codec;

    /// Logical key name, before any prefix is applied.
    const NAME: &'static str;

    fn codec(spec: &Self::Spec) -> &Self::Codec;
}

/// The value type stored under key `K`.
pub type KeyValue<K> = <<K as SpecKey>::Codec as Codec>::Value;

/// Declare a spec struct and one marker type per key.
///
/// Each entry is `field: CodecType = codec_expression => KeyMarker`. The
/// field name is the logical key name.
///
/// ```ignore
/// use typed_kv::codec::{self, ArrayOf, NumberCodec, StringCodec};
/// use typed_kv::typed_spec;
///
/// typed_spec! {
///     /// Settings persisted by the editor.
///     pub struct EditorSpec {
///         font_size: NumberCodec = codec::number() => FontSize,
///         recent: ArrayOf<StringCodec> = codec::array_of(codec::string()) => Recent,
///     }
/// }
///
/// let storage = TypedStorage::new(EditorSpec::new(), MemoryStorage::new());
/// storage.set::<FontSize>(&14.0)?;
/// ```
#[macro_export]
macro_rules! typed_spec {
    (
        $(#[$meta:meta])*
        $vis:vis struct $spec:ident {
            $( $field:ident : $codec:ty = $init:expr => $key:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $spec {
            $( pub $field: $codec, )+
        }

        impl $spec {
            #[allow(dead_code)]
            pub fn new() -> Self {
                Self {
                    $( $field: $init, )+
                }
            }
        }

        impl ::core::default::Default for $spec {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::typed::Spec for $spec {
            const KEYS: &'static [&'static str] = &[ $( ::core::stringify!($field) ),+ ];
        }

        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            $vis struct $key;

            impl $crate::typed::SpecKey for $key {
                type Spec = $spec;
                type Codec = $codec;

                const NAME: &'static str = ::core::stringify!($field);

                fn codec(spec: &$spec) -> &$codec {
                    &spec.$field
                }
            }
        )+
    };
}
