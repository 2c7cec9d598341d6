mod common;

use common::{addr, funded_keeper, gold};
use paychan::error::ChannelError;
use paychan::ledger::Ledger;
use rust_decimal_macros::dec;

#[test]
fn test_open_close_worked_example() {
    // Sender S holds {gold:100}. Lock 40, settle 15 to the receiver.
    let sender = addr(1);
    let receiver = addr(2);
    let mut keeper = funded_keeper(sender, &gold(dec!(100)));

    keeper
        .create_channel(&sender, &receiver, gold(dec!(40)))
        .unwrap();
    assert_eq!(keeper.ledger().balance(&sender), gold(dec!(60)));

    let channel = keeper.get_channel(&sender, &receiver, 1).unwrap().unwrap();
    assert_eq!(channel.sender, sender);
    assert_eq!(channel.receiver, receiver);
    assert_eq!(channel.id, 1);
    assert_eq!(channel.balance, gold(dec!(40)));

    keeper
        .close_channel(&sender, &receiver, 1, gold(dec!(15)))
        .unwrap();
    assert_eq!(keeper.ledger().balance(&sender), gold(dec!(75)));
    assert_eq!(keeper.ledger().balance(&receiver), gold(dec!(15)));
    assert!(keeper.get_channel(&sender, &receiver, 1).unwrap().is_none());

    // Settlement is exactly-once.
    let err = keeper
        .close_channel(&sender, &receiver, 1, gold(dec!(1)))
        .unwrap_err();
    assert!(matches!(err, ChannelError::ChannelNotFound(_)));
}

#[test]
fn test_lookup_never_written_and_closed_keys() {
    let sender = addr(1);
    let receiver = addr(2);
    let mut keeper = funded_keeper(sender, &gold(dec!(100)));

    assert!(keeper.get_channel(&sender, &receiver, 1).unwrap().is_none());

    keeper
        .create_channel(&sender, &receiver, gold(dec!(10)))
        .unwrap();
    assert!(keeper.get_channel(&sender, &receiver, 1).unwrap().is_some());
    // Adjacent ids stay absent.
    assert!(keeper.get_channel(&sender, &receiver, 0).unwrap().is_none());
    assert!(keeper.get_channel(&sender, &receiver, 2).unwrap().is_none());

    keeper
        .close_channel(&sender, &receiver, 1, gold(dec!(10)))
        .unwrap();
    assert!(keeper.get_channel(&sender, &receiver, 1).unwrap().is_none());
}

#[test]
fn test_concurrent_channels_between_same_pair() {
    let sender = addr(1);
    let receiver = addr(2);
    let mut keeper = funded_keeper(sender, &gold(dec!(100)));

    keeper
        .create_channel(&sender, &receiver, gold(dec!(10)))
        .unwrap();
    keeper
        .create_channel(&sender, &receiver, gold(dec!(20)))
        .unwrap();
    keeper
        .create_channel(&sender, &receiver, gold(dec!(30)))
        .unwrap();

    let channels = keeper.list_channels(&sender, &receiver).unwrap();
    assert_eq!(channels.iter().map(|c| c.id).collect::<Vec<_>>(), [1, 2, 3]);

    // Close the middle one; the others are untouched.
    keeper
        .close_channel(&sender, &receiver, 2, gold(dec!(20)))
        .unwrap();
    let channels = keeper.list_channels(&sender, &receiver).unwrap();
    assert_eq!(channels.iter().map(|c| c.id).collect::<Vec<_>>(), [1, 3]);
    assert_eq!(keeper.ledger().balance(&receiver), gold(dec!(20)));
}

#[test]
fn test_rejections_leave_no_trace() {
    let sender = addr(1);
    let receiver = addr(2);
    let mut keeper = funded_keeper(sender, &gold(dec!(100)));

    let unsorted = common::coins(&[("silver", dec!(1)), ("gold", dec!(2))]);
    let zeroed = common::coins(&[("gold", dec!(0))]);
    let negative = common::coins(&[("gold", dec!(-5))]);

    for bad in [unsorted, zeroed, negative] {
        let err = keeper
            .create_channel(&sender, &receiver, bad)
            .unwrap_err();
        assert!(matches!(err, ChannelError::InvalidAmount(_)));
    }

    assert_eq!(keeper.ledger().balance(&sender), gold(dec!(100)));
    assert!(keeper.list_channels(&sender, &receiver).unwrap().is_empty());
}
