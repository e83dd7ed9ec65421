//! Comprehensive tests for domain_banking

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{CoreError, Money, MoneyError};
use domain_banking::{
    Account, AccountKind, BankingError, Client, ClientProfile, PolicyDecision, Transaction,
    TransactionKind,
};
use test_utils::{
    assert_account_unchanged, assert_balance, assert_history_amounts, assert_history_kinds,
    deny_above, deny_all, AccountSnapshot, ClientFixtures, MoneyFixtures, TestAccountBuilder,
    TestIndividualClientBuilder,
};

// ============================================================================
// Deposit Tests
// ============================================================================

mod deposit_tests {
    use super::*;

    #[test]
    fn test_deposit_increases_balance_and_records_entry() {
        let mut client = ClientFixtures::general_client();
        let account = Account::open(1, "0001", &mut client);

        let id = account.deposit(MoneyFixtures::amount_100()).unwrap();

        assert_balance(account, dec!(100));
        assert_eq!(account.history().len(), 1);
        let entry = account.history().last().unwrap();
        assert_eq!(entry.id(), id);
        assert_eq!(entry.kind(), TransactionKind::Deposit);
    }

    #[test]
    fn test_zero_deposit_is_invalid_amount() {
        let mut client = ClientFixtures::general_client();
        let account = Account::open(1, "0001", &mut client);
        let before = AccountSnapshot::capture(account);

        let result = account.deposit(Money::zero());

        assert!(matches!(result, Err(BankingError::InvalidAmount(_))));
        assert_account_unchanged(&before, account);
    }

    #[test]
    fn test_negative_deposit_is_invalid_amount() {
        let mut client = TestAccountBuilder::new().with_balance(dec!(40).into()).build();
        let account = client.account_mut(1).unwrap();
        let before = AccountSnapshot::capture(account);

        let result = account.deposit(MoneyFixtures::negative());

        assert!(matches!(result, Err(BankingError::InvalidAmount(_))));
        assert_account_unchanged(&before, account);
    }

    #[test]
    fn test_checking_account_deposit_has_no_limits() {
        let mut client = ClientFixtures::general_client();
        let account = TestAccountBuilder::new().standard_checking().build_in(&mut client);

        account.deposit(Money::new(dec!(10000))).unwrap();

        assert_balance(account, dec!(10000));
        assert_eq!(account.checking_limits().unwrap().withdrawal_count(), 0);
    }
    #[test]
    fn test_deposit_overflow_leaves_account_unchanged() {
        let mut client = ClientFixtures::general_client();
        let account = Account::open(1, "0001", &mut client);
        account.deposit(Money::new(Decimal::MAX)).unwrap();
        let before = AccountSnapshot::capture(account);

        let result = account.deposit(Money::new(dec!(1)));

        assert!(matches!(
            result,
            Err(BankingError::Core(CoreError::Money(MoneyError::Overflow)))
        ));
        assert_account_unchanged(&before, account);
    }
}

// ============================================================================
// Standard Account Withdrawal Tests
// ============================================================================

mod withdrawal_tests {
    use super::*;

    #[test]
    fn test_withdrawal_within_balance() {
        let mut client = TestAccountBuilder::new().with_balance(MoneyFixtures::amount_100()).build();
        let account = client.account_mut(1).unwrap();

        account.withdraw(Money::new(dec!(30))).unwrap();

        assert_balance(account, dec!(70));
        assert_history_kinds(account, &[TransactionKind::Deposit, TransactionKind::Withdrawal]);
    }

    #[test]
    fn test_withdrawal_of_entire_balance() {
        let mut client = TestAccountBuilder::new().with_balance(MoneyFixtures::amount_100()).build();
        let account = client.account_mut(1).unwrap();

        account.withdraw(MoneyFixtures::amount_100()).unwrap();

        assert!(account.balance().is_zero());
    }

    #[test]
    fn test_withdrawal_above_balance_is_insufficient() {
        let mut client = TestAccountBuilder::new().with_balance(MoneyFixtures::amount_100()).build();
        let account = client.account_mut(1).unwrap();
        let before = AccountSnapshot::capture(account);

        let result = account.withdraw(Money::new(dec!(100.01)));

        match result {
            Err(BankingError::InsufficientBalance { balance, requested }) => {
                assert_eq!(balance, MoneyFixtures::amount_100());
                assert_eq!(requested, Money::new(dec!(100.01)));
            }
            other => panic!("Expected InsufficientBalance, got {:?}", other),
        }
        assert_account_unchanged(&before, account);
    }

    // Known quirk: the balance check runs before the positivity check, so a
    // negative amount is never reported as insufficient balance.
    #[test]
    fn test_negative_withdrawal_with_balance_reports_invalid_amount() {
        let mut client = TestAccountBuilder::new().with_balance(Money::new(dec!(50))).build();
        let account = client.account_mut(1).unwrap();

        let result = account.withdraw(MoneyFixtures::negative());

        assert!(matches!(result, Err(BankingError::InvalidAmount(_))));
        assert_balance(account, dec!(50));
    }

    #[test]
    fn test_negative_withdrawal_on_empty_account_reports_invalid_amount() {
        let mut client = ClientFixtures::general_client();
        let account = Account::open(1, "0001", &mut client);

        let result = account.withdraw(MoneyFixtures::negative());

        assert!(matches!(result, Err(BankingError::InvalidAmount(_))));
    }

    #[test]
    fn test_zero_withdrawal_on_empty_account_reports_invalid_amount() {
        let mut client = ClientFixtures::general_client();
        let account = Account::open(1, "0001", &mut client);

        let result = account.withdraw(Money::zero());

        assert!(matches!(result, Err(BankingError::InvalidAmount(_))));
    }

    #[test]
    fn test_positive_withdrawal_on_empty_account_is_insufficient() {
        let mut client = ClientFixtures::general_client();
        let account = Account::open(1, "0001", &mut client);

        let result = account.withdraw(Money::new(dec!(10)));

        assert!(matches!(result, Err(BankingError::InsufficientBalance { .. })));
    }

    #[test]
    fn test_standard_account_has_no_withdrawal_count() {
        let mut client = TestAccountBuilder::new().with_balance(MoneyFixtures::balance_1000()).build();
        let account = client.account_mut(1).unwrap();

        for _ in 0..10 {
            account.withdraw(Money::new(dec!(10))).unwrap();
        }

        assert_balance(account, dec!(900));
        assert!(account.checking_limits().is_none());
    }
}

// ============================================================================
// Checking Account Tests
// ============================================================================

mod checking_tests {
    use super::*;

    fn checking_with_1000() -> Client {
        TestAccountBuilder::new()
            .standard_checking()
            .with_balance(MoneyFixtures::balance_1000())
            .build()
    }

    #[test]
    fn test_open_checking_sets_limits() {
        let mut client = ClientFixtures::general_client();
        let account = Account::open_checking(5, "0002", &mut client, Money::new(dec!(500)), 3);

        assert!(account.is_checking());
        let limits = account.checking_limits().unwrap();
        assert_eq!(limits.overdraft_limit(), Money::new(dec!(500)));
        assert_eq!(limits.daily_withdrawal_limit(), 3);
        assert_eq!(limits.withdrawal_count(), 0);
        assert_eq!(account.branch_code(), "0002");
    }

    #[test]
    fn test_daily_limit_exhausted_after_three_withdrawals() {
        let mut client = checking_with_1000();
        let account = client.account_mut(1).unwrap();

        for _ in 0..3 {
            account.withdraw(MoneyFixtures::amount_100()).unwrap();
        }
        assert_eq!(account.checking_limits().unwrap().withdrawal_count(), 3);
        assert_balance(account, dec!(700));

        let before = AccountSnapshot::capture(account);
        let result = account.withdraw(MoneyFixtures::amount_100());

        assert!(matches!(
            result,
            Err(BankingError::DailyWithdrawalLimitReached { limit: 3 })
        ));
        assert_account_unchanged(&before, account);
        assert_eq!(account.checking_limits().unwrap().remaining_withdrawals(), 0);
    }

    #[test]
    fn test_withdrawal_above_limit_is_rejected() {
        let mut client = checking_with_1000();
        let account = client.account_mut(1).unwrap();
        let before = AccountSnapshot::capture(account);

        let result = account.withdraw(MoneyFixtures::above_limit());

        assert!(matches!(result, Err(BankingError::ExceedsWithdrawalLimit { .. })));
        assert_balance(account, dec!(1000));
        assert_account_unchanged(&before, account);
    }

    #[test]
    fn test_withdrawal_equal_to_limit_is_allowed() {
        let mut client = checking_with_1000();
        let account = client.account_mut(1).unwrap();

        account.withdraw(MoneyFixtures::overdraft_limit()).unwrap();

        assert_balance(account, dec!(500));
    }

    #[test]
    fn test_balance_check_precedes_limit_check() {
        let mut client = TestAccountBuilder::new()
            .standard_checking()
            .with_balance(MoneyFixtures::amount_100())
            .build();
        let account = client.account_mut(1).unwrap();

        let result = account.withdraw(MoneyFixtures::above_limit());

        assert!(matches!(result, Err(BankingError::InsufficientBalance { .. })));
    }

    #[test]
    fn test_amount_check_precedes_count_check() {
        let mut client = TestAccountBuilder::new()
            .checking(Money::new(dec!(500)), 0)
            .with_balance(MoneyFixtures::balance_1000())
            .build();
        let account = client.account_mut(1).unwrap();

        assert!(matches!(
            account.withdraw(MoneyFixtures::negative()),
            Err(BankingError::InvalidAmount(_))
        ));
        assert!(matches!(
            account.withdraw(MoneyFixtures::above_limit()),
            Err(BankingError::ExceedsWithdrawalLimit { .. })
        ));
        assert!(matches!(
            account.withdraw(MoneyFixtures::amount_100()),
            Err(BankingError::DailyWithdrawalLimitReached { limit: 0 })
        ));
    }

    #[test]
    fn test_failed_withdrawals_do_not_consume_count() {
        let mut client = checking_with_1000();
        let account = client.account_mut(1).unwrap();

        let _ = account.withdraw(MoneyFixtures::above_limit());
        let _ = account.withdraw(MoneyFixtures::negative());

        assert_eq!(account.checking_limits().unwrap().withdrawal_count(), 0);
    }

    #[test]
    fn test_account_kind_matches() {
        let client = checking_with_1000();
        let account = client.account(1).unwrap();
        assert!(matches!(account.kind(), AccountKind::Checking(_)));
    }
}

// ============================================================================
// History Tests
// ============================================================================

mod history_tests {
    use super::*;

    #[test]
    fn test_history_keeps_operation_order() {
        let mut client = ClientFixtures::general_client();
        let account = Account::open(1, "0001", &mut client);

        account.deposit(Money::new(dec!(100))).unwrap();
        account.withdraw(Money::new(dec!(30))).unwrap();
        account.deposit(Money::new(dec!(20))).unwrap();

        assert_history_amounts(account, &[dec!(100), dec!(30), dec!(20)]);
        assert_history_kinds(
            account,
            &[TransactionKind::Deposit, TransactionKind::Withdrawal, TransactionKind::Deposit],
        );
    }

    #[test]
    fn test_failed_operations_are_not_recorded() {
        let mut client = ClientFixtures::general_client();
        let account = Account::open(1, "0001", &mut client);

        account.deposit(Money::new(dec!(50))).unwrap();
        let _ = account.withdraw(Money::new(dec!(80)));
        let _ = account.deposit(Money::zero());

        assert_history_amounts(account, &[dec!(50)]);
    }

    #[test]
    fn test_report_renders_each_entry() {
        let mut client = ClientFixtures::general_client();
        let account = Account::open(1, "0001", &mut client);
        account.deposit(Money::new(dec!(100))).unwrap();
        account.withdraw(Money::new(dec!(30.5))).unwrap();

        let report = account.history().render_report();

        assert!(report.starts_with("\n *** Histórico de Transações ***\n\n"));
        assert!(report.contains("Deposito --> Valor: 100\n"));
        assert!(report.contains("Saque --> Valor: 30.5\n"));
        assert!(report.ends_with("\n\n"));
    }

    #[test]
    fn test_transaction_ids_are_time_ordered() {
        let mut client = ClientFixtures::general_client();
        let account = Account::open(1, "0001", &mut client);
        account.deposit(Money::new(dec!(1))).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        account.deposit(Money::new(dec!(2))).unwrap();

        let entries = account.history().entries();
        assert!(entries[0].id() < entries[1].id());
        assert!(entries[0].recorded_at() <= entries[1].recorded_at());
    }

    #[test]
    fn test_history_serializes() {
        let mut client = ClientFixtures::general_client();
        let account = Account::open(1, "0001", &mut client);
        account.deposit(Money::new(dec!(100))).unwrap();

        let json = serde_json::to_string(account.history()).unwrap();
        assert!(json.contains("\"Deposit\""));
    }
}

// ============================================================================
// Client Tests
// ============================================================================

mod client_tests {
    use super::*;

    #[test]
    fn test_general_client_profile() {
        let client = ClientFixtures::general_client();
        assert_eq!(client.profile(), &ClientProfile::General);
        assert!(client.individual_details().is_none());
        assert!(client.accounts().is_empty());
    }

    #[test]
    fn test_individual_client_keeps_identity() {
        let client = TestIndividualClientBuilder::new()
            .with_full_name("Joao Pereira")
            .build();

        let details = client.individual_details().unwrap();
        assert_eq!(details.full_name, "Joao Pereira");
        assert_eq!(details.tax_id, ClientFixtures::individual_details().tax_id);
    }

    #[test]
    fn test_individual_client_rejects_empty_tax_id() {
        let details = TestIndividualClientBuilder::new().with_tax_id("").details();

        let result = Client::individual("Rua X", details);

        assert!(matches!(result, Err(BankingError::InvalidClientData(_))));
    }

    #[test]
    fn test_accounts_kept_in_registration_order() {
        let mut client = ClientFixtures::individual_client();
        Account::open(10, "0001", &mut client);
        Account::open_checking(20, "0001", &mut client, Money::new(dec!(500)), 3);
        Account::open(30, "0002", &mut client);

        let numbers: Vec<u64> = client.accounts().iter().map(Account::number).collect();
        assert_eq!(numbers, vec![10, 20, 30]);
        assert!(client.accounts().iter().all(|a| a.owner() == client.id()));
    }

    #[test]
    fn test_duplicate_registration_is_not_guarded() {
        let mut client = ClientFixtures::general_client();
        let copy = Account::open(1, "0001", &mut client).clone();

        client.add_account(copy);

        assert_eq!(client.accounts().len(), 2);
        assert_eq!(client.accounts()[0].number(), client.accounts()[1].number());
    }

    #[test]
    fn test_client_level_operations() {
        let mut client = TestAccountBuilder::new().standard_checking().build();

        client.deposit(1, MoneyFixtures::balance_1000()).unwrap();
        client.withdraw(1, MoneyFixtures::amount_100()).unwrap();

        assert_eq!(client.total_balance().unwrap(), Money::new(dec!(900)));
        assert!(matches!(
            client.withdraw(2, MoneyFixtures::amount_100()),
            Err(BankingError::AccountNotFound(2))
        ));
    }
}

// ============================================================================
// Policy Tests
// ============================================================================

mod policy_tests {
    use super::*;

    #[test]
    fn test_denied_deposit_leaves_account_unchanged() {
        let mut client = ClientFixtures::general_client().with_policy(deny_all("frozen"));
        let account = Account::open(1, "0001", &mut client);
        let before = AccountSnapshot::capture(account);

        let result = account.deposit(MoneyFixtures::amount_100());

        match result {
            Err(BankingError::TransactionDenied(reason)) => assert_eq!(reason, "frozen"),
            other => panic!("Expected TransactionDenied, got {:?}", other),
        }
        assert_account_unchanged(&before, account);
    }

    #[test]
    fn test_denied_checking_withdrawal_does_not_consume_count() {
        let mut client = TestAccountBuilder::new()
            .standard_checking()
            .with_balance(MoneyFixtures::balance_1000())
            .build();
        client.set_policy(deny_above(Money::new(dec!(200))));
        let account = client.account_mut(1).unwrap();
        let before = AccountSnapshot::capture(account);

        let result = account.withdraw(Money::new(dec!(300)));

        assert!(matches!(result, Err(BankingError::TransactionDenied(_))));
        assert_account_unchanged(&before, account);

        account.withdraw(Money::new(dec!(200))).unwrap();
        assert_eq!(account.checking_limits().unwrap().withdrawal_count(), 1);
    }

    #[test]
    fn test_validation_runs_before_policy() {
        let mut client = ClientFixtures::general_client().with_policy(deny_all("frozen"));
        let account = Account::open(1, "0001", &mut client);

        let result = account.withdraw(MoneyFixtures::amount_100());

        assert!(matches!(result, Err(BankingError::InsufficientBalance { .. })));
    }

    #[test]
    fn test_policy_sees_account_state() {
        let policy = |account: &Account, transaction: &Transaction| {
            if transaction.kind() == TransactionKind::Deposit && account.history().len() >= 2 {
                PolicyDecision::deny("deposit quota used")
            } else {
                PolicyDecision::Allow
            }
        };
        let mut client = ClientFixtures::general_client().with_policy(policy);
        let account = Account::open(1, "0001", &mut client);

        account.deposit(Money::new(dec!(1))).unwrap();
        account.deposit(Money::new(dec!(1))).unwrap();

        assert!(matches!(
            account.deposit(Money::new(dec!(1))),
            Err(BankingError::TransactionDenied(_))
        ));
        assert!(account.withdraw(Money::new(dec!(1))).is_ok());
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_validation_failure_grouping() {
        assert!(BankingError::InvalidAmount(Money::zero()).is_validation_failure());
        assert!(BankingError::DailyWithdrawalLimitReached { limit: 3 }.is_validation_failure());
        assert!(!BankingError::TransactionDenied("x".into()).is_validation_failure());
        assert!(!BankingError::AccountNotFound(1).is_validation_failure());
    }

    #[test]
    fn test_error_display() {
        let error = BankingError::ExceedsWithdrawalLimit {
            limit: Money::new(dec!(500)),
            requested: Money::new(dec!(600)),
        };
        assert_eq!(
            error.to_string(),
            "Withdrawal exceeds per-withdrawal limit: limit=500, requested=600"
        );
        assert_eq!(error.reason(), "exceeds per-withdrawal limit");
    }
}
