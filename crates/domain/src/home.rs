//! Home — a real-estate listing and its JSON conversion rules.

use serde_json::{Map, Value};

use crate::error::{HomeListError, ValidationError};
use crate::id::HomeId;

/// Table and column names shared by JSON bodies and the storage schema.
pub mod keys {
    pub const TABLE: &str = "homes";

    pub const ID: &str = "id";
    pub const AREA: &str = "area";
    pub const FLOOR: &str = "floor";
    pub const ROOMS: &str = "rooms";
    pub const PRICE: &str = "price";
    pub const CURRENCY: &str = "currency";

    /// Every content column, in schema order.
    pub const CONTENT: [&str; 5] = [AREA, FLOOR, ROOMS, PRICE, CURRENCY];
}

/// A listing record. `id` is `None` until the storage engine assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Home {
    pub id: Option<HomeId>,
    pub area: String,
    pub floor: String,
    pub rooms: String,
    pub price: String,
    pub currency: String,
}

impl Home {
    /// Create a builder for constructing a [`Home`].
    #[must_use]
    pub fn builder() -> HomeBuilder {
        HomeBuilder::default()
    }

    /// Decode a full listing from a JSON request body.
    ///
    /// Any `id` in the body is ignored, identifiers are assigned by storage.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAnObject`] when `body` is not an object,
    /// [`ValidationError::MissingField`] when a content field is absent or
    /// `null`, and [`ValidationError::InvalidType`] when one is not a string.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let object = as_object(body)?;
        Ok(Self {
            id: None,
            area: required(object, keys::AREA)?,
            floor: required(object, keys::FLOOR)?,
            rooms: required(object, keys::ROOMS)?,
            price: required(object, keys::PRICE)?,
            currency: required(object, keys::CURRENCY)?,
        })
    }

    /// Encode this listing as a JSON object, `id` included (`null` when not
    /// yet persisted).
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut object = Map::with_capacity(6);
        object.insert(
            keys::ID.to_string(),
            self.id.map_or(Value::Null, |id| Value::from(id.as_raw())),
        );
        object.insert(keys::AREA.to_string(), Value::from(self.area.as_str()));
        object.insert(keys::FLOOR.to_string(), Value::from(self.floor.as_str()));
        object.insert(keys::ROOMS.to_string(), Value::from(self.rooms.as_str()));
        object.insert(keys::PRICE.to_string(), Value::from(self.price.as_str()));
        object.insert(
            keys::CURRENCY.to_string(),
            Value::from(self.currency.as_str()),
        );
        Value::Object(object)
    }

    /// Overwrite only the fields present in `patch`.
    pub fn apply(&mut self, patch: HomePatch) {
        let HomePatch {
            area,
            floor,
            rooms,
            price,
            currency,
        } = patch;
        if let Some(area) = area {
            self.area = area;
        }
        if let Some(floor) = floor {
            self.floor = floor;
        }
        if let Some(rooms) = rooms {
            self.rooms = rooms;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(currency) = currency {
            self.currency = currency;
        }
    }

    /// Overwrite every content field with the ones from `other`. `self.id` is
    /// kept, `other.id` is discarded.
    pub fn replace_content(&mut self, other: Home) {
        self.area = other.area;
        self.floor = other.floor;
        self.rooms = other.rooms;
        self.price = other.price;
        self.currency = other.currency;
    }
}

/// Step-by-step builder for [`Home`].
#[derive(Debug, Default)]
pub struct HomeBuilder {
    id: Option<HomeId>,
    area: Option<String>,
    floor: Option<String>,
    rooms: Option<String>,
    price: Option<String>,
    currency: Option<String>,
}

impl HomeBuilder {
    #[must_use]
    pub fn id(mut self, id: HomeId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    #[must_use]
    pub fn floor(mut self, floor: impl Into<String>) -> Self {
        self.floor = Some(floor.into());
        self
    }

    #[must_use]
    pub fn rooms(mut self, rooms: impl Into<String>) -> Self {
        self.rooms = Some(rooms.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Consume the builder and return a [`Home`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeListError::Validation`] if any content field was not set.
    pub fn build(self) -> Result<Home, HomeListError> {
        Ok(Home {
            id: self.id,
            area: self.area.ok_or(ValidationError::MissingField(keys::AREA))?,
            floor: self.floor.ok_or(ValidationError::MissingField(keys::FLOOR))?,
            rooms: self.rooms.ok_or(ValidationError::MissingField(keys::ROOMS))?,
            price: self.price.ok_or(ValidationError::MissingField(keys::PRICE))?,
            currency: self
                .currency
                .ok_or(ValidationError::MissingField(keys::CURRENCY))?,
        })
    }
}

/// Sparse set of content-field overwrites decoded from a PATCH body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomePatch {
    pub area: Option<String>,
    pub floor: Option<String>,
    pub rooms: Option<String>,
    pub price: Option<String>,
    pub currency: Option<String>,
}

type Setter = fn(&mut HomePatch, String);

/// The keys a PATCH body may carry, and where each one lands.
const UPDATABLE_KEYS: [(&str, Setter); 5] = [
    (keys::AREA, |patch, value| patch.area = Some(value)),
    (keys::FLOOR, |patch, value| patch.floor = Some(value)),
    (keys::ROOMS, |patch, value| patch.rooms = Some(value)),
    (keys::PRICE, |patch, value| patch.price = Some(value)),
    (keys::CURRENCY, |patch, value| patch.currency = Some(value)),
];

impl HomePatch {
    /// Decode a partial update from a JSON request body.
    ///
    /// Keys outside the updatable set are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAnObject`] when `body` is not an object
    /// and [`ValidationError::InvalidType`] when an updatable key holds
    /// anything but a string.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let object = as_object(body)?;
        let mut patch = Self::default();
        for (key, setter) in UPDATABLE_KEYS {
            match object.get(key) {
                None => {}
                Some(Value::String(value)) => setter(&mut patch, value.clone()),
                Some(_) => return Err(ValidationError::InvalidType(key)),
            }
        }
        Ok(patch)
    }

    /// `true` when no field would be touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or(ValidationError::NotAnObject)
}

fn required(object: &Map<String, Value>, key: &'static str) -> Result<String, ValidationError> {
    match object.get(key) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(key)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ValidationError::InvalidType(key)),
    }
}
