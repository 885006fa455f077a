//! End-to-end core pipeline: parse a raw feed body, store it, search it,
//! and present the matches, without touching the network.

use hargastok::feeds;
use hargastok::models::Dataset;
use hargastok::present;
use hargastok::search;
use hargastok::store::DatasetStore;

const STOK_FEED: &str = "\
PT Multibangun - Laporan Stok\n\
per tanggal hari ini\n\
Brand,Material,Dimensi Roll,Saldo,,Gudang\n\
Alderon,uPVC Twinwall,830mm x 6m,12,pcs,Surabaya\n\
SS30,Galvalum AZ100,1000mm,250,m,Gresik\n\
,,,,,\n";

#[test]
fn stok_feed_flows_from_text_to_display() {
    let table = feeds::parse_feed(Dataset::Stok, STOK_FEED).unwrap();
    assert_eq!(
        table.headers,
        vec!["Brand", "Material", "Dimensi Roll", "Saldo", "", "Gudang"]
    );
    // The banner lines and the blank padding row are gone.
    assert_eq!(table.rows.len(), 2);

    let mut store = DatasetStore::new();
    store.replace(Dataset::Stok, table);
    assert!(store.is_loaded(Dataset::Stok));

    let entry = store.get(Dataset::Stok);
    let matches = search::search(&entry.rows, "ss30", 1);
    assert_eq!(matches.len(), 1);

    let display = present::present(&matches, &entry.headers, Dataset::Stok, "ss30");
    assert_eq!(display.headers[3], "Saldo");
    assert_eq!(
        display.rows[0][0],
        "<span class=\"highlight\">SS30</span>"
    );
    assert_eq!(display.rows[0][3], "250 m");
}

#[test]
fn saldo_round_trip_merges_the_unit_column() {
    let table =
        feeds::parse_feed(Dataset::Stok, "Brand,Material,Saldo,,Gudang\nX,Y,5,pcs,Z\n").unwrap();
    let rows: Vec<_> = table.rows.iter().collect();

    let display = present::present(&rows, &table.headers, Dataset::Stok, "x");
    assert_eq!(display.rows[0][3], "5 pcs");
}

#[test]
fn harga_feed_flows_with_verbatim_headers() {
    let table = feeds::parse_feed(
        Dataset::Harga,
        "Item,Harga,Satuan\nSS30 Galvanized,125000,lembar\nHollow 4x4,87500,batang\n",
    )
    .unwrap();

    let matches = search::search(&table.rows, "875", 1);
    assert_eq!(matches.len(), 1);

    let display = present::present(&matches, &table.headers, Dataset::Harga, "875");
    assert_eq!(display.headers, vec!["Item", "Harga", "Satuan"]);
    assert_eq!(
        display.rows[0][1],
        "<span class=\"highlight\">875</span>00"
    );
}

#[test]
fn refresh_invalidation_keeps_the_stale_snapshot() {
    let table = feeds::parse_feed(Dataset::Harga, "Item\nSS30\n").unwrap();

    let mut store = DatasetStore::new();
    store.replace(Dataset::Harga, table);
    store.invalidate(Dataset::Harga);

    assert!(!store.is_loaded(Dataset::Harga));
    // A caller skipping the is_loaded check can still see the old rows.
    assert_eq!(store.get(Dataset::Harga).rows.len(), 1);
}
