//! Serde support for the concrete dimensions.
//!
//! A measurement serializes as a struct with its quantity and unit
//! abbreviation:
//!
//! ```json
//! {"quantity": 100.0, "unit": "cm"}
//! ```
//!
//! Deserialization goes through the validating constructor, so a
//! non-positive quantity or an abbreviation outside the dimension's table is
//! rejected with the validator's message.
//!
//! The functions can also be used with `#[serde(with = "...")]` on fields
//! of any [`Dimension`] type.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::measurement::Dimension;
use crate::units::{Length, Speed, Time};

/// Serializes a measurement as a struct with `quantity` and `unit` fields.
pub fn serialize<M, S>(measurement: &M, serializer: S) -> Result<S::Ok, S::Error>
where
    M: Dimension,
    S: Serializer,
{
    let mut state = serializer.serialize_struct(M::NAME, 2)?;
    state.serialize_field("quantity", &measurement.core().quantity())?;
    state.serialize_field("unit", measurement.core().unit())?;
    state.end()
}

/// Deserializes a measurement from a struct with `quantity` and `unit` fields.
pub fn deserialize<'de, M, D>(deserializer: D) -> Result<M, D::Error>
where
    M: Dimension,
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(field_identifier, rename_all = "lowercase")]
    enum Field {
        Quantity,
        Unit,
    }

    struct MeasurementVisitor<M>(PhantomData<M>);

    impl<'de, M: Dimension> Visitor<'de> for MeasurementVisitor<M> {
        type Value = M;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "struct {} with quantity and unit fields", M::NAME)
        }

        fn visit_map<V>(self, mut map: V) -> Result<M, V::Error>
        where
            V: MapAccess<'de>,
        {
            let mut quantity: Option<f64> = None;
            let mut unit: Option<String> = None;

            while let Some(key) = map.next_key()? {
                match key {
                    Field::Quantity => {
                        if quantity.is_some() {
                            return Err(de::Error::duplicate_field("quantity"));
                        }
                        quantity = Some(map.next_value()?);
                    }
                    Field::Unit => {
                        if unit.is_some() {
                            return Err(de::Error::duplicate_field("unit"));
                        }
                        unit = Some(map.next_value()?);
                    }
                }
            }

            let quantity = quantity.ok_or_else(|| de::Error::missing_field("quantity"))?;
            let unit = unit.ok_or_else(|| de::Error::missing_field("unit"))?;

            M::from_quantity(quantity, &unit).map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_struct(
        M::NAME,
        &["quantity", "unit"],
        MeasurementVisitor(PhantomData),
    )
}

macro_rules! impl_serde {
    ($($dimension:ty),+) => {
        $(
            impl Serialize for $dimension {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serialize(self, serializer)
                }
            }

            impl<'de> Deserialize<'de> for $dimension {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserialize(deserializer)
                }
            }
        )+
    };
}

impl_serde!(Length, Time, Speed);
