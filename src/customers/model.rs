//! Customer record types and the startup seed list.

use serde::{Deserialize, Serialize};

/// Identifier type for customers.
pub type CustomerId = i64;

/// A customer record as stored in the collection.
///
/// Missing fields deserialize to their zero value, so `{"id": 7}` is a valid
/// (if sparse) customer. Request bodies go through `extract::JsonBody`, which
/// also folds key case and drops `null` fields before this shape is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// Caller-assigned identifier, unique within the collection.
    pub id: CustomerId,

    pub name: String,

    /// Free-form role, "Admin" or "User" by convention.
    pub role: String,

    pub email: String,

    pub phone: i64,

    pub contacted: bool,
}

/// Fields a PATCH may overwrite.
///
/// `id` and `phone` are not part of the shape; a `phone` key in the payload is
/// ignored like any other unknown field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerUpdate {
    pub name: String,

    pub role: String,

    pub email: String,

    pub contacted: bool,
}

impl Customer {
    /// Overwrite every updatable field with the values from `update`.
    pub fn apply(&mut self, update: CustomerUpdate) {
        self.name = update.name;
        self.role = update.role;
        self.email = update.email;
        self.contacted = update.contacted;
    }
}

fn customer(id: CustomerId, name: &str, role: &str, email: &str, phone: i64, contacted: bool) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        role: role.to_string(),
        email: email.to_string(),
        phone,
        contacted,
    }
}

/// The ten records every process starts with.
pub fn seed_customers() -> Vec<Customer> {
    vec![
        customer(1, "John Doe", "Admin", "john.doe@example.com", 1234567890, true),
        customer(2, "Jane Smith", "User", "jane.smith@example.com", 9876543210, false),
        customer(3, "Bob Johnson", "User", "bob.johnson@example.com", 5551234567, true),
        customer(4, "Alice Williams", "Admin", "alice.williams@example.com", 9998887777, false),
        customer(5, "Charlie Brown", "User", "charlie.brown@example.com", 1112223333, true),
        customer(6, "Eva Miller", "User", "eva.miller@example.com", 4445556666, false),
        customer(7, "David Davis", "Admin", "david.davis@example.com", 7778889999, true),
        customer(8, "Grace Taylor", "User", "grace.taylor@example.com", 2223334444, false),
        customer(9, "Frank Anderson", "User", "frank.anderson@example.com", 6667778888, true),
        customer(10, "Helen White", "Admin", "helen.white@example.com", 3334445555, false),
    ]
}
