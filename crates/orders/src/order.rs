use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use storefront_catalog::Product;
use storefront_core::{
    Aggregate, AggregateRoot, Amount, CustomerId, DomainError, DomainResult, Event, OrderId,
    ProductId,
};

use crate::status::{OrderStatus, PaymentType};

/// Order line: product reference and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    product_id: ProductId,
    quantity: u32,
}

impl LineItem {
    pub fn new(product_id: ProductId, quantity: u32) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(Self {
            product_id,
            quantity,
        })
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Shipping address exactly as the backend stored it.
///
/// The storefront has used more than one address layout over time
/// (`street`/`zipcode` and `addressLine1`/`pincode`), so the record stays
/// opaque and only offers string lookups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingAddress(Map<String, JsonValue>);

impl ShippingAddress {
    pub fn new(fields: Map<String, JsonValue>) -> Self {
        Self(fields)
    }

    /// String (or numeric, e.g. pincodes) field rendered as text.
    pub fn field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Payment state shown next to the payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentState {
    Paid,
    Pending,
}

/// Everything needed to materialize an [`Order`] that already exists upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub id: OrderId,
    pub customer_id: Option<CustomerId>,
    pub created_at: DateTime<Utc>,
    pub amount: Amount,
    pub status: OrderStatus,
    pub payment_type: PaymentType,
    pub is_paid: bool,
    pub items: Vec<LineItem>,
    pub address: ShippingAddress,
}

/// Aggregate root: Order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: OrderId,
    customer_id: Option<CustomerId>,
    created_at: DateTime<Utc>,
    amount: Amount,
    status: OrderStatus,
    payment_type: PaymentType,
    is_paid: bool,
    items: Vec<LineItem>,
    address: ShippingAddress,
    #[serde(skip)]
    version: u64,
}

impl Order {
    pub fn new(details: NewOrder) -> Self {
        let NewOrder {
            id,
            customer_id,
            created_at,
            amount,
            status,
            payment_type,
            is_paid,
            items,
            address,
        } = details;

        Self {
            id,
            customer_id,
            created_at,
            amount,
            status,
            payment_type,
            is_paid,
            items,
            address,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_id(&self) -> Option<&CustomerId> {
        self.customer_id.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    pub fn payment_type(&self) -> &PaymentType {
        &self.payment_type
    }

    pub fn is_paid(&self) -> bool {
        self.is_paid
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn address(&self) -> &ShippingAddress {
        &self.address
    }

    /// The seller can cancel until the order is delivered or already cancelled.
    pub fn is_cancellable(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Customers may only cancel before the order leaves the warehouse.
    pub fn is_cancellable_by_customer(&self) -> bool {
        self.status == OrderStatus::Placed
    }

    /// Human-facing reference: `#` plus the first 8 characters of the id, upper-cased.
    pub fn short_reference(&self) -> String {
        let head: String = self.id.as_str().chars().take(8).collect();
        format!("#{}", head.to_uppercase())
    }

    pub fn payment_state(&self) -> PaymentState {
        if self.is_paid {
            PaymentState::Paid
        } else {
            PaymentState::Pending
        }
    }

    /// Percentage filled on the customer's delivery tracker.
    pub fn delivery_progress(&self) -> u8 {
        match self.status {
            OrderStatus::Placed => 33,
            OrderStatus::OutForDelivery => 66,
            _ => 100,
        }
    }

    /// Price of one line at the product's current offer price.
    ///
    /// Returns `None` when `product` is not the one the line refers to.
    pub fn line_total(&self, line: &LineItem, product: &Product) -> Option<Amount> {
        if line.product_id() != product.id_typed() {
            return None;
        }
        Some(product.line_revenue(line.quantity()))
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Who asked for a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    Seller,
    Customer(CustomerId),
}

/// Command: UpdateStatus (seller console).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatus {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub occurred_at: DateTime<Utc>,
}

/// Command: CancelOrder (seller console or customer order history).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrder {
    pub order_id: OrderId,
    pub requested_by: Actor,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderCommand {
    UpdateStatus(UpdateStatus),
    CancelOrder(CancelOrder),
}

/// Event: StatusChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChanged {
    pub order_id: OrderId,
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OrderCancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCancelled {
    pub order_id: OrderId,
    pub cancelled_by: Actor,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    StatusChanged(StatusChanged),
    OrderCancelled(OrderCancelled),
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::StatusChanged(_) => "orders.order.status_changed",
            OrderEvent::OrderCancelled(_) => "orders.order.cancelled",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::StatusChanged(e) => e.occurred_at,
            OrderEvent::OrderCancelled(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Order {
    type Command = OrderCommand;
    type Event = OrderEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            OrderEvent::StatusChanged(e) => {
                self.status = e.to.clone();
            }
            OrderEvent::OrderCancelled(_) => {
                self.status = OrderStatus::Cancelled;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::UpdateStatus(cmd) => self.handle_update_status(cmd),
            OrderCommand::CancelOrder(cmd) => self.handle_cancel(cmd),
        }
    }
}

impl Order {
    fn ensure_order_id(&self, order_id: &OrderId) -> Result<(), DomainError> {
        if &self.id != order_id {
            return Err(DomainError::invariant("order_id mismatch"));
        }
        Ok(())
    }

    fn handle_update_status(&self, cmd: &UpdateStatus) -> Result<Vec<OrderEvent>, DomainError> {
        self.ensure_order_id(&cmd.order_id)?;

        if !cmd.status.is_known() {
            return Err(DomainError::validation(format!(
                "unknown order status `{}`",
                cmd.status
            )));
        }

        if cmd.status == self.status {
            return Err(DomainError::conflict(format!(
                "order is already `{}`",
                self.status
            )));
        }

        Ok(vec![OrderEvent::StatusChanged(StatusChanged {
            order_id: cmd.order_id.clone(),
            from: self.status.clone(),
            to: cmd.status.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_cancel(&self, cmd: &CancelOrder) -> Result<Vec<OrderEvent>, DomainError> {
        self.ensure_order_id(&cmd.order_id)?;

        let allowed = match &cmd.requested_by {
            Actor::Seller => self.is_cancellable(),
            Actor::Customer(customer_id) => {
                if self.customer_id.as_ref() != Some(customer_id) {
                    return Err(DomainError::Unauthorized);
                }
                self.is_cancellable_by_customer()
            }
        };

        if !allowed {
            return Err(DomainError::invariant(format!(
                "cannot cancel an order that is `{}`",
                self.status
            )));
        }

        Ok(vec![OrderEvent::OrderCancelled(OrderCancelled {
            order_id: cmd.order_id.clone(),
            cancelled_by: cmd.requested_by.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }
}
