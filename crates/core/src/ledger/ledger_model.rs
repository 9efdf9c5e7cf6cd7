use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::DayId;
use crate::errors::LedgerError;
use crate::transactions::{TradeAction, Transaction};

/// Adjusted cost basis carried by a ledger node: the weighted-average
/// convention, not FIFO/LIFO.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedCostBase {
    /// Total cost of the running position.
    pub total_cost: Decimal,
    /// Average cost per unit (total cost / running quantity). Zero when a
    /// closing sale brings the running quantity to exactly zero.
    pub cost_per_unit: Decimal,
}

/// One transaction inside a ledger, linked to its chronological neighbors
/// by arena index. The running quantity and ACB are filled exactly once by
/// [`Ledger::compute_acb`] and never recomputed afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerNode {
    pub transaction: Transaction,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    /// Quantity held after this transaction. Never negative once the ACB
    /// pass has run (short positions are rejected at insertion).
    pub running_quantity: Decimal,
    pub acb: AdjustedCostBase,
}

impl LedgerNode {
    fn new(transaction: Transaction) -> Self {
        LedgerNode {
            transaction,
            prev: None,
            next: None,
            running_quantity: Decimal::ZERO,
            acb: AdjustedCostBase::default(),
        }
    }

    pub fn day(&self) -> DayId {
        self.transaction.day()
    }

    pub fn is_sell(&self) -> bool {
        self.transaction.action == TradeAction::Sell
    }
}

/// Ordered transaction sequence for one (symbol, account-type) pair,
/// strictly non-decreasing by trade date.
///
/// Nodes live in an arena `Vec`; `prev`/`next` are indices into it, so
/// mid-chain SELL insertion is pointer surgery on integers and traversal
/// follows `head` to `tail`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    nodes: Vec<LedgerNode>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn head_index(&self) -> Option<usize> {
        self.head
    }

    pub fn node(&self, index: usize) -> &LedgerNode {
        &self.nodes[index]
    }

    /// Nodes from head to tail (chronological order).
    pub fn iter(&self) -> LedgerIter<'_> {
        LedgerIter {
            ledger: self,
            cursor: self.head,
        }
    }

    /// Appends one transaction as a new ledger block.
    ///
    /// A BUY becomes the new tail. A SELL is linked in after the last node
    /// whose trade date is strictly earlier than the SELL's; if no such
    /// node exists the ledger would go net-short, which is a structural
    /// error rather than a supported state.
    pub fn add_block(&mut self, transaction: Transaction) -> Result<usize, LedgerError> {
        match transaction.action {
            TradeAction::Buy => Ok(self.append_tail(transaction)),
            TradeAction::Sell => self.insert_sell(transaction),
            TradeAction::Dividend => Err(LedgerError::UnsupportedAction {
                order_id: transaction.order_id.clone(),
                action: transaction.action.to_string(),
            }),
        }
    }

    fn append_tail(&mut self, transaction: Transaction) -> usize {
        let index = self.nodes.len();
        let mut node = LedgerNode::new(transaction);
        node.prev = self.tail;
        self.nodes.push(node);

        match self.tail {
            Some(old_tail) => self.nodes[old_tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        index
    }

    fn insert_sell(&mut self, transaction: Transaction) -> Result<usize, LedgerError> {
        // Scan backward from the tail while the candidate predecessor is
        // not earlier than the SELL's trade date.
        let mut cursor = self.tail;
        while let Some(i) = cursor {
            if self.nodes[i].transaction.trade_date < transaction.trade_date {
                break;
            }
            cursor = self.nodes[i].prev;
        }

        let Some(prev_index) = cursor else {
            return Err(LedgerError::ShortSale {
                symbol: transaction.symbol.clone(),
                date: transaction.trade_date,
                quantity: transaction.quantity,
            });
        };

        let index = self.nodes.len();
        let next = self.nodes[prev_index].next;
        let mut node = LedgerNode::new(transaction);
        node.prev = Some(prev_index);
        node.next = next;
        self.nodes.push(node);

        match next {
            Some(next_index) => self.nodes[next_index].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.nodes[prev_index].next = Some(index);
        Ok(index)
    }

    /// Fills running quantity and ACB for every node, head to tail.
    ///
    /// Each node derives purely from its own transaction and its already
    /// computed predecessor, so the pass must run top-down and re-running
    /// it yields identical values.
    pub fn compute_acb(&mut self) {
        let mut cursor = self.head;
        while let Some(i) = cursor {
            let quantity = self.nodes[i].transaction.quantity;
            let price = self.nodes[i].transaction.unit_price;

            let (running, total_cost) = match self.nodes[i].prev {
                None => (quantity, quantity * price),
                Some(p) => {
                    let prev_running = self.nodes[p].running_quantity;
                    let prev_total = self.nodes[p].acb.total_cost;
                    let prev_cpu = self.nodes[p].acb.cost_per_unit;
                    if self.nodes[i].is_sell() {
                        // Cost basis shrinks at the average cost carried
                        // forward, never at the sale price.
                        (prev_running - quantity, prev_total - quantity * prev_cpu)
                    } else {
                        (prev_running + quantity, prev_total + quantity * price)
                    }
                }
            };

            let cost_per_unit = if running.is_zero() {
                Decimal::ZERO
            } else {
                total_cost / running
            };

            let node = &mut self.nodes[i];
            node.running_quantity = running;
            node.acb = AdjustedCostBase {
                total_cost,
                cost_per_unit,
            };
            cursor = node.next;
        }
    }
}

/// Head-to-tail iterator over ledger nodes.
pub struct LedgerIter<'a> {
    ledger: &'a Ledger,
    cursor: Option<usize>,
}

impl<'a> Iterator for LedgerIter<'a> {
    type Item = &'a LedgerNode;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let node = &self.ledger.nodes[index];
        self.cursor = node.next;
        Some(node)
    }
}
