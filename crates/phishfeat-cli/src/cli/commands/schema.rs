//! `phishfeat schema` – print the feature names in column order.

use phishfeat_core::schema::FEATURE_SCHEMA;

pub fn run_schema() {
    for (i, name) in FEATURE_SCHEMA.iter().enumerate() {
        println!("{:>2}  {}", i + 1, name);
    }
}
