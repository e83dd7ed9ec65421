//! Property-Based Test Generators
//!
//! Provides proptest strategies for amounts and operation sequences.

use core_kernel::Money;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// An operation applied to an account in a generated sequence
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    Deposit(Money),
    Withdraw(Money),
}

/// Strategy for generating positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..10_000_000i64
}

/// Strategy for generating positive Money values
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(Money::from_minor)
}

/// Strategy for generating zero or negative Money values
pub fn non_positive_money_strategy() -> impl Strategy<Value = Money> {
    (-10_000_000i64..=0i64).prop_map(Money::from_minor)
}

/// Strategy for generating any Money value, biased towards valid amounts
pub fn money_strategy() -> impl Strategy<Value = Money> {
    prop_oneof![
        4 => positive_money_strategy(),
        1 => non_positive_money_strategy(),
        1 => Just(Money::zero()),
    ]
}

/// Strategy for generating a per-withdrawal limit
pub fn overdraft_limit_strategy() -> impl Strategy<Value = Money> {
    (1i64..5_000_000i64).prop_map(|n| Money::new(Decimal::new(n, 2)))
}

/// Strategy for generating a withdrawal count limit
pub fn daily_withdrawal_limit_strategy() -> impl Strategy<Value = u32> {
    0u32..10u32
}

/// Strategy for generating a single operation
pub fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        money_strategy().prop_map(Operation::Deposit),
        money_strategy().prop_map(Operation::Withdraw),
    ]
}

/// Strategy for generating an operation sequence of up to `max_len` steps
pub fn operation_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(operation_strategy(), 0..=max_len)
}
