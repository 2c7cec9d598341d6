use paychan::address::{ADDRESS_LEN, AccountAddress};
use paychan::coins::{Coin, Coins};
use paychan::keeper::ChannelKeeper;
use paychan::ledger::InMemoryLedger;
use paychan::store::InMemoryStore;
use rust_decimal::Decimal;

pub fn addr(b: u8) -> AccountAddress {
    AccountAddress::new([b; ADDRESS_LEN])
}

pub fn gold(amount: Decimal) -> Coins {
    Coins::new(vec![Coin::new("gold", amount)])
}

#[allow(dead_code)]
pub fn coins(entries: &[(&str, Decimal)]) -> Coins {
    Coins::new(entries.iter().map(|(d, a)| Coin::new(*d, *a)).collect())
}

/// A keeper over in-memory collaborators with `funds` seeded for `account`.
#[allow(dead_code)]
pub fn funded_keeper(
    account: AccountAddress,
    funds: &Coins,
) -> ChannelKeeper<InMemoryStore, InMemoryLedger> {
    let mut ledger = InMemoryLedger::new();
    ledger.fund(&account, funds);
    ChannelKeeper::new(InMemoryStore::new(), ledger)
}
