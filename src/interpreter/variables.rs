use std::f64::consts::{E, PI};

/// Number of slots backing a [`VariableTable`].
pub const CAPACITY: usize = 10;

/// Number of slots that are searchable in the default table.
pub const DEFAULT_ACTIVE: usize = 5;

/// Name given to slots that hold no user-visible variable.
const BLANK: &str = "  ";

/// A named variable slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable {
    /// The name used to refer to the slot in expressions.
    pub name:  &'static str,
    /// The current value.
    pub value: f64,
}

/// The fixed-capacity table of named variables.
///
/// The table has room for [`CAPACITY`] slots but only the first
/// `active` of them can be looked up, read or updated. The inactive slots
/// are placeholders and never become reachable; the table does not grow.
///
/// The default table has five active slots, in this order: `t`, `T`, `e`,
/// `pi` and a blank placeholder. Slot 0 is the time variable that `step`
/// compares against.
///
/// # Example
/// ```
/// use parsetree::interpreter::variables::VariableTable;
///
/// let mut table = VariableTable::new();
///
/// assert_eq!(table.lookup("pi"), Some(3));
/// assert_eq!(table.set("t", 2.5), Some(0));
/// assert_eq!(table.value(0), Some(2.5));
///
/// // Unknown names are never added.
/// assert_eq!(table.set("x", 1.0), None);
/// assert_eq!(table.active_len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VariableTable {
    slots:  [Variable; CAPACITY],
    active: usize,
}

impl Default for VariableTable {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableTable {
    /// Creates the default table.
    #[must_use]
    pub const fn new() -> Self {
        let blank = Variable { name:  BLANK,
                               value: 0.0, };
        let mut slots = [blank; CAPACITY];
        slots[0] = Variable { name:  "t",
                              value: 0.0, };
        slots[1] = Variable { name:  "T",
                              value: 0.0, };
        slots[2] = Variable { name:  "e",
                              value: E, };
        slots[3] = Variable { name:  "pi",
                              value: PI, };

        Self { slots,
               active: DEFAULT_ACTIVE }
    }

    /// Returns the index of the active slot named `name`.
    ///
    /// The match is exact and only active slots are searched.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.active_slots()
            .iter()
            .position(|var| var.name == name)
    }

    /// Sets the value of an existing variable and returns its index.
    ///
    /// Returns `None`, leaving the table untouched, when `name` is not an
    /// active slot.
    pub fn set(&mut self, name: &str, value: f64) -> Option<usize> {
        let index = self.lookup(name)?;
        self.slots[index].value = value;
        tracing::trace!(name, value, index, "variable updated");
        Some(index)
    }

    /// Returns the current value of an active slot.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.active_slots().get(index).map(|var| var.value)
    }

    /// Returns the current value of the variable named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.lookup(name).and_then(|index| self.value(index))
    }

    /// Returns the name of an active slot.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.active_slots().get(index).map(|var| var.name)
    }

    /// The number of searchable slots.
    #[must_use]
    pub const fn active_len(&self) -> usize {
        self.active
    }

    /// The number of backing slots, active or not.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Iterates over the active slots in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.active_slots().iter()
    }

    fn active_slots(&self) -> &[Variable] {
        &self.slots[..self.active]
    }
}
