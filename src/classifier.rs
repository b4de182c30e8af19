use crate::types::address_component::RawAddressComponent;
use crate::types::normalized_address::{
    field_key, NormalizedAddress, FIELD_CITY, FIELD_POSTCODE, FIELD_STATE, FIELD_STREET,
};

#[derive(Default)]
struct PostcodeParts {
    prefix: String,
    main: String,
    suffix: String,
}

/// Maps an unordered set of typed address components into the four
/// normalized fields, keyed by `prefix`.
///
/// Total over any input: unknown type tags are ignored, duplicates resolve
/// last-writer-wins per field, and all four keys are always present. An
/// empty string marks a field the components did not supply.
pub fn classify(components: &[RawAddressComponent], prefix: &str) -> NormalizedAddress {
    let mut street_tokens: Vec<&str> = Vec::new();
    let mut postcode = PostcodeParts::default();
    let mut state = String::new();
    let mut state_filled = false;
    let mut city = String::new();
    let mut city_filled = false;

    for comp in components {
        // A street number always lands before any route names seen so far.
        if comp.has_type("street_number") {
            street_tokens.insert(0, &comp.short_name);
        }
        if comp.has_type("route") {
            street_tokens.push(&comp.long_name);
        }

        if comp.has_type("postal_code") {
            postcode.main = comp.short_name.clone();
        } else if comp.has_type("postal_code_prefix") {
            postcode.prefix = comp.short_name.clone();
        } else if comp.has_type("postal_code_suffix") {
            postcode.suffix = comp.short_name.clone();
        }

        // County-equivalent overwrites unconditionally; province-equivalent
        // only fills a still-empty field.
        if comp.has_type("administrative_area_level_2") {
            state = comp.long_name.clone();
            state_filled = true;
        } else if comp.has_type("administrative_area_level_1") && !state_filled {
            state = comp.long_name.clone();
            state_filled = true;
        }

        if comp.has_type("locality") {
            city = comp.long_name.clone();
            city_filled = true;
        } else if comp.has_type("postal_town") && !city_filled {
            city = comp.long_name.clone();
            city_filled = true;
        }
    }

    // Join-then-trim: missing parts never leave stray spaces at the edges,
    // but a missing middle part keeps its internal gap.
    let joined = format!("{} {} {}", postcode.prefix, postcode.main, postcode.suffix);

    let mut address = NormalizedAddress::new();
    address.set(field_key(prefix, FIELD_STREET), street_tokens.join(" "));
    address.set(field_key(prefix, FIELD_CITY), city);
    address.set(field_key(prefix, FIELD_STATE), state);
    address.set(field_key(prefix, FIELD_POSTCODE), joined.trim().to_string());
    address
}
