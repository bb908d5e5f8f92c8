//! Wire DTOs for the restaurant ordering API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's JSON (`camelCase`, Portuguese). Numeric fields
//! are decoded leniently because the API serializes decimals as strings and
//! some identifiers as numbers; the client enforces nothing beyond shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Record identifier; the API mixes numeric and string ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub String);

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(Self(s)),
            serde_json::Value::Number(n) => Ok(Self(n.to_string())),
            _ => Err(D::Error::custom("expected string or number id")),
        }
    }
}

// =============================================================================
// ORDERS
// =============================================================================

/// Kitchen progress of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pendente,
    EmPreparo,
    Entregue,
    Concluido,
}

impl OrderStatus {
    pub const ALL: [Self; 4] = [Self::Pendente, Self::EmPreparo, Self::Entregue, Self::Concluido];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pendente => "PENDENTE",
            Self::EmPreparo => "EM PREPARO",
            Self::Entregue => "ENTREGUE",
            Self::Concluido => "CONCLUÍDO",
        }
    }

    /// Wire value, also used as `<option>` value.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Pendente => "PENDENTE",
            Self::EmPreparo => "EM_PREPARO",
            Self::Entregue => "ENTREGUE",
            Self::Concluido => "CONCLUIDO",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_wire() == raw)
    }

    /// CSS modifier for status-colored widgets.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Pendente => "pending",
            Self::EmPreparo => "preparing",
            Self::Entregue => "delivered",
            Self::Concluido => "done",
        }
    }
}

/// Latest order of a table, as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: Id,
    pub status: OrderStatus,
}

/// Dashboard row: a table and its most recent order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOverview {
    pub mesa: Table,
    pub ultimo_pedido: OrderSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderTable {
    pub id: Id,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub numero: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: Id,
    pub nome: String,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub preco: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Id,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub quantidade: i64,
    #[serde(default)]
    pub observacoes: Option<String>,
    pub produto: ProductRef,
}

/// Full order as shown on the order detail screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Id,
    pub status: OrderStatus,
    pub created_at: String,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub valor_total: f64,
    pub mesa: OrderTable,
    #[serde(default)]
    pub itens: Vec<OrderItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryTable {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub numero: i64,
}

/// Closed order listed on the history screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Id,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub valor_total: f64,
    pub created_at: String,
    pub mesa: HistoryTable,
}

#[derive(Clone, Debug, Serialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

// =============================================================================
// TABLES
// =============================================================================

/// Occupancy as tracked by the API; a `Bloqueada` table has an open order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Livre,
    Bloqueada,
}

impl TableStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Livre => "LIVRE",
            Self::Bloqueada => "BLOQUEADA",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: Id,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub numero: i64,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewTable {
    pub numero: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct TableStatusUpdate {
    pub status: TableStatus,
}

// =============================================================================
// CATALOG
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: Id,
    pub nome: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Id,
    pub nome: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewCategory {
    pub nome: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Id,
    pub nome: String,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub preco: f64,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub imagem: Option<String>,
    #[serde(default = "default_active")]
    pub ativo: bool,
    pub categoria: CategoryRef,
}

fn default_active() -> bool {
    true
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer, got {s:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Decimal amounts arrive as JSON numbers or as strings such as `"12.50"`.
fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| D::Error::custom(format!("expected decimal amount, got {value}")))
}
