use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrderId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Record of one completed order: the ready notices of every item
/// prepared for it, in creation order.
#[derive(Debug, Clone)]
pub struct OrderTicket {
    id: OrderId,
    placed_at: chrono::DateTime<chrono::Utc>,
    lines: Vec<String>,
}

impl OrderTicket {
    pub fn new() -> Self {
        Self {
            id: OrderId::new(),
            placed_at: chrono::Utc::now(),
            lines: Vec::new(),
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn placed_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.placed_at
    }

    /// Status lines in the order items were prepared.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn add_line<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for OrderTicket {
    fn default() -> Self {
        Self::new()
    }
}
