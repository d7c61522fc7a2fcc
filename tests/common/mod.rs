//! Common test fixtures: specs shared across the integration tests.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use typed_kv::codec::{
    self, ArrayOf, BooleanCodec, IntegerCodec, JsonWithValidation, NumberCodec, SerdeValidator,
    StringCodec, TupleOf,
};
use typed_kv::typed_spec;

// =============================================================================
// Specs
// =============================================================================

typed_spec! {
    /// The single-number spec used by most facade tests.
    pub struct CounterSpec {
        key: NumberCodec = codec::number() => Key,
    }
}

/// Profile stored as validated JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u8,
}

typed_spec! {
    /// A spec exercising every built-in codec.
    pub struct AppSpec {
        title: StringCodec = codec::string() => Title,
        volume: NumberCodec = codec::number() => Volume,
        enabled: BooleanCodec = codec::boolean() => Enabled,
        launches: IntegerCodec<u64> = codec::integer() => Launches,
        tags: ArrayOf<StringCodec> = codec::array_of(codec::string()) => Tags,
        window: TupleOf<(NumberCodec, NumberCodec, BooleanCodec)> =
            codec::tuple_of((codec::number(), codec::number(), codec::boolean())) => Window,
        profile: JsonWithValidation<Profile, SerdeValidator<Profile>> =
            codec::json_with_serde() => ProfileKey,
    }
}
