use fintrack_core::db::open_db_in_memory;
use fintrack_core::{
    SqliteTransactionRepository, Transaction, TransactionListQuery, TransactionRepository,
    TransactionService,
};
use uuid::Uuid;

#[test]
fn append_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTransactionRepository::new(&conn);

    let txn = Transaction::new(-250.75, "groceries");
    let id = repo.append_transaction(&txn).unwrap();

    let loaded = repo.get_transaction(id).unwrap().unwrap();
    assert_eq!(loaded, txn);
}

#[test]
fn get_missing_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTransactionRepository::new(&conn);

    assert!(repo.get_transaction(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn append_rejects_invalid_records() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTransactionRepository::new(&conn);

    let zero = Transaction::new(0.0, "nothing");
    assert!(repo.append_transaction(&zero).is_err());

    let nan = Transaction::new(f64::NAN, "broken");
    assert!(repo.append_transaction(&nan).is_err());

    let visible = repo
        .list_transactions(&TransactionListQuery::default())
        .unwrap();
    assert!(visible.is_empty());
}

#[test]
fn list_is_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTransactionRepository::new(&conn);

    let older = Transaction::with_id(Uuid::new_v4(), -10.0, "coffee", 1_000);
    let newer = Transaction::with_id(Uuid::new_v4(), 500.0, "refund", 2_000);
    repo.append_transaction(&older).unwrap();
    repo.append_transaction(&newer).unwrap();

    let listed = repo
        .list_transactions(&TransactionListQuery::default())
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].uuid, newer.uuid);
    assert_eq!(listed[1].uuid, older.uuid);
}

#[test]
fn list_since_filters_older_records() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTransactionRepository::new(&conn);

    repo.append_transaction(&Transaction::with_id(Uuid::new_v4(), -10.0, "old", 1_000))
        .unwrap();
    repo.append_transaction(&Transaction::with_id(Uuid::new_v4(), -20.0, "cutoff", 2_000))
        .unwrap();
    repo.append_transaction(&Transaction::with_id(Uuid::new_v4(), 30.0, "new", 3_000))
        .unwrap();

    let query = TransactionListQuery {
        since_epoch_ms: Some(2_000),
        ..TransactionListQuery::default()
    };
    let listed = repo.list_transactions(&query).unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|txn| txn.created_at >= 2_000));
}

#[test]
fn list_respects_limit_and_offset() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTransactionRepository::new(&conn);

    for idx in 0..5 {
        let txn = Transaction::with_id(
            Uuid::new_v4(),
            -(f64::from(idx) + 1.0),
            format!("item {idx}"),
            i64::from(idx) * 1_000,
        );
        repo.append_transaction(&txn).unwrap();
    }

    let query = TransactionListQuery {
        limit: Some(2),
        offset: 1,
        ..TransactionListQuery::default()
    };
    let page = repo.list_transactions(&query).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].created_at, 3_000);
    assert_eq!(page[1].created_at, 2_000);
}

#[test]
fn delete_removes_record_and_missing_delete_errors() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTransactionRepository::new(&conn);

    let txn = Transaction::new(-15.0, "snack");
    repo.append_transaction(&txn).unwrap();
    repo.delete_transaction(txn.uuid).unwrap();

    assert!(repo.get_transaction(txn.uuid).unwrap().is_none());
    assert!(repo.delete_transaction(txn.uuid).is_err());
}

#[test]
fn service_net_total_sums_signed_amounts() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTransactionRepository::new(&conn);

    repo.append_transaction(&Transaction::with_id(Uuid::new_v4(), -100.0, "spend", 1_000))
        .unwrap();
    repo.append_transaction(&Transaction::with_id(Uuid::new_v4(), 400.0, "income", 2_000))
        .unwrap();
    repo.append_transaction(&Transaction::with_id(Uuid::new_v4(), -50.0, "yesterday", 0))
        .unwrap();

    let service = TransactionService::new(SqliteTransactionRepository::new(&conn));
    assert_eq!(service.net_total_since(1_000).unwrap(), 300.0);
    assert_eq!(service.net_total_since(0).unwrap(), 250.0);
}

#[test]
fn service_records_manual_entries_and_lists_them() {
    let conn = open_db_in_memory().unwrap();
    let service = TransactionService::new(SqliteTransactionRepository::new(&conn));

    let id = service.record_manual(-99.0, "dinner").unwrap();
    let loaded = service.get(id).unwrap().unwrap();
    assert_eq!(loaded.amount, -99.0);
    assert_eq!(loaded.note, "dinner");

    let recent = service.list_recent(Some(10)).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].uuid, id);
}

#[test]
fn service_rejects_unusable_manual_amounts() {
    let conn = open_db_in_memory().unwrap();
    let service = TransactionService::new(SqliteTransactionRepository::new(&conn));

    assert!(service.record_manual(0.0, "nothing").is_err());
    assert!(service.record_manual(f64::INFINITY, "too much").is_err());
}
