use crate::data::models::schema::*;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A product id and the desired quantity. Quantity never drops below 1.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub quantity: i32,
}

/// Persisted cart of a single user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub user_id: String,
    pub items: Vec<CartLine>,
}

impl Cart {
    pub fn new(user_id: impl Into<String>) -> Self {
        Cart {
            user_id: user_id.into(),
            items: Vec::new(),
        }
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.items.iter().find(|l| l.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.items.iter_mut().find(|l| l.product_id == product_id)
    }

    /// Adds `quantity` units, merging into an existing line for the same product.
    /// Returns false when `quantity` is below 1.
    pub fn add(&mut self, product_id: &str, quantity: i32) -> bool {
        if quantity < 1 {
            return false;
        }

        match self.line_mut(product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.items.push(CartLine {
                product_id: product_id.to_string(),
                quantity,
            }),
        }
        true
    }

    /// Sets the quantity of an existing line. Values below 1 are rejected as a no-op.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i32) -> bool {
        if quantity < 1 {
            return false;
        }

        match self.line_mut(product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn increment(&mut self, product_id: &str) -> bool {
        match self.line_mut(product_id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Decrementing a line at quantity 1 leaves it untouched.
    pub fn decrement(&mut self, product_id: &str) -> bool {
        match self.line_mut(product_id) {
            Some(line) if line.quantity > 1 => {
                line.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|l| l.product_id != product_id);
        self.items.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn product_ids(&self) -> Vec<String> {
        self.items.iter().map(|l| l.product_id.clone()).collect()
    }
}

#[derive(Queryable, Selectable, PartialEq, Debug)]
#[diesel(table_name = cart_lines)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct CartLineRow {
    pub user_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub position: i32,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = cart_lines)]
pub struct NewCartLine<'a> {
    pub user_id: &'a str,
    pub product_id: &'a str,
    pub quantity: i32,
    pub position: i32,
}
