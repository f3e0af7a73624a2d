use std::env;
use std::fs;
use std::path::Path;

/// Copy a fixture CSV into OUT_DIR for include_str!, with a minimal
/// fallback so the app still compiles from a bare checkout.
fn copy_fixture(out_dir: &str, name: &str, fallback: &str) {
    let src = Path::new("../fixtures").join(name);
    let dest = Path::new(out_dir).join(name);
    if src.exists() {
        fs::copy(&src, &dest).unwrap();
    } else {
        fs::write(&dest, fallback).unwrap();
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    copy_fixture(
        &out_dir,
        "panel.csv",
        "Country Name,Series Name,1995,1996,1997\n\
         China,GDP growth (annual %),10.9,9.9,9.2\n\
         China,\"Inflation, consumer prices (annual %)\",16.8,8.3,2.8\n",
    );
    copy_fixture(
        &out_dir,
        "exchange_rates.csv",
        "Date,Japanese Yen (JPY)\n3-Jan-1994,112.3\n",
    );
    copy_fixture(
        &out_dir,
        "country_codes.csv",
        "COUNTRY,CODE,CURRENCY\nJapan,JPN,Japanese Yen (JPY)\n",
    );

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/panel.csv");
    println!("cargo:rerun-if-changed=../fixtures/exchange_rates.csv");
    println!("cargo:rerun-if-changed=../fixtures/country_codes.csv");
}
