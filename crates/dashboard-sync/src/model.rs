//! Dashboard Models
//!
//! Data structures matching the backend's menu, summary and report payloads.
//! Backend records are normalized on the way in: ids always become strings,
//! missing counters become zero and unknown meal periods become breakfast.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, ValidationError};

// ========================
// Identifiers & Enums
// ========================

/// Opaque menu identifier, always held in string form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(String);

impl MenuId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalize a backend id value (`"abc"`, `42`, `{"$oid": "abc"}`)
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        let raw = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Object(map) => match map.get("$oid") {
                Some(Value::String(s)) => s.clone(),
                _ => return Err(ModelError::InvalidId(value.to_string())),
            },
            _ => return Err(ModelError::InvalidId(value.to_string())),
        };
        if raw.is_empty() {
            return Err(ModelError::InvalidId(value.to_string()));
        }
        Ok(Self(raw))
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MenuId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Meal period a menu is served for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriod {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
}

impl MealPeriod {
    pub const ALL: [MealPeriod; 3] = [MealPeriod::Breakfast, MealPeriod::Lunch, MealPeriod::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealPeriod::Breakfast => "breakfast",
            MealPeriod::Lunch => "lunch",
            MealPeriod::Dinner => "dinner",
        }
    }

    /// Lenient read of a stored period: names in any case, or the numeric
    /// codes 1/2/3. Anything else is breakfast.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "lunch" => MealPeriod::Lunch,
                "dinner" => MealPeriod::Dinner,
                _ => MealPeriod::Breakfast,
            },
            Some(Value::Number(n)) => match n.as_i64() {
                Some(2) => MealPeriod::Lunch,
                Some(3) => MealPeriod::Dinner,
                _ => MealPeriod::Breakfast,
            },
            _ => MealPeriod::Breakfast,
        }
    }
}

/// Time window a waste summary is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Menu,
    Day,
    Week,
    Month,
}

impl Scope {
    pub const ALL: [Scope; 4] = [Scope::Menu, Scope::Day, Scope::Week, Scope::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Menu => "menu",
            Scope::Day => "day",
            Scope::Week => "week",
            Scope::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scope::Menu => "This menu",
            Scope::Day => "Today",
            Scope::Week => "This week",
            Scope::Month => "This month",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menu" => Ok(Scope::Menu),
            "day" => Ok(Scope::Day),
            "week" => Ok(Scope::Week),
            "month" => Ok(Scope::Month),
            other => Err(ModelError::InvalidScope(other.to_string())),
        }
    }
}

// ========================
// Items & Menus
// ========================

/// One tracked food item within a menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub taken: u32,
    #[serde(default)]
    pub wasted: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            taken: 0,
            wasted: 0,
        }
    }

    pub fn leftovers(&self) -> u32 {
        self.quantity.saturating_sub(self.taken)
    }
}

/// Entry of the menu list (`GET /api/menus`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawMenu")]
pub struct MenuSummary {
    pub id: MenuId,
    pub name: String,
    pub meal_period: MealPeriod,
    pub item_count: usize,
}

/// Full menu (`GET/PUT /api/menus/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawMenu")]
pub struct MenuRecord {
    pub name: String,
    pub meal_period: MealPeriod,
    pub items: Vec<Item>,
}

/// Wire shape shared by list entries and full menus
#[derive(Debug, Deserialize)]
struct RawMenu {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, rename = "_id")]
    object_id: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, alias = "mealPeriod")]
    meal_period: Option<Value>,
    #[serde(default)]
    items: Option<Vec<Item>>,
}

impl TryFrom<RawMenu> for MenuSummary {
    type Error = ModelError;

    fn try_from(raw: RawMenu) -> Result<Self, Self::Error> {
        let id_value = raw
            .id
            .filter(|v| !v.is_null())
            .or(raw.object_id.filter(|v| !v.is_null()))
            .ok_or(ModelError::MissingId)?;
        Ok(Self {
            id: MenuId::from_value(&id_value)?,
            name: raw.name.unwrap_or_default(),
            meal_period: MealPeriod::from_value(raw.meal_period.as_ref()),
            item_count: raw.items.map(|items| items.len()).unwrap_or(0),
        })
    }
}

impl From<RawMenu> for MenuRecord {
    fn from(raw: RawMenu) -> Self {
        Self {
            name: raw.name.unwrap_or_default(),
            meal_period: MealPeriod::from_value(raw.meal_period.as_ref()),
            items: raw.items.unwrap_or_default(),
        }
    }
}

/// Body of `PUT /api/menus/{id}`; always carries the full item list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuPayload {
    pub name: String,
    pub meal_period: MealPeriod,
    pub items: Vec<Item>,
}

// ========================
// Menu Creation
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMenuItem {
    pub name: String,
    pub quantity: i64,
}

/// Body of `POST /api/menus`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMenu {
    pub name: String,
    pub meal_period: MealPeriod,
    pub items: Vec<NewMenuItem>,
}

impl NewMenu {
    /// Check the submission before it may be sent; returns the trimmed menu
    pub fn validate(&self) -> Result<NewMenu, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.items.is_empty() {
            return Err(ValidationError::NoItems);
        }
        let mut seen = HashSet::new();
        for item in &self.items {
            if item.quantity <= 0 {
                return Err(ValidationError::NonPositiveQuantity(item.name.clone()));
            }
            if !seen.insert(item.name.as_str()) {
                return Err(ValidationError::DuplicateItem(item.name.clone()));
            }
        }
        Ok(NewMenu {
            name: name.to_string(),
            meal_period: self.meal_period,
            items: self.items.clone(),
        })
    }
}

// ========================
// Waste Report
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemWaste {
    pub item: String,
    #[serde(default)]
    pub leftovers: i64,
    #[serde(default)]
    pub wasted: i64,
    #[serde(default)]
    pub total_waste: i64,
}

/// Structured report from `GET /api/waste-summary`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct WasteReport {
    #[serde(default)]
    pub total_waste: i64,
    #[serde(default)]
    pub individual_waste: Vec<ItemWaste>,
}

impl WasteReport {
    pub fn has_data(&self) -> bool {
        !self.individual_waste.is_empty()
    }

    /// Backend already sorts by total waste, highest first
    pub fn most_wasted(&self, n: usize) -> &[ItemWaste] {
        &self.individual_waste[..n.min(self.individual_waste.len())]
    }

    pub fn least_wasteful(&self, n: usize) -> Vec<ItemWaste> {
        let mut sorted = self.individual_waste.clone();
        sorted.sort_by_key(|w| w.total_waste);
        sorted.truncate(n);
        sorted
    }
}
