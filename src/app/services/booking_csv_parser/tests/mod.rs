//! Test fixtures for the booking export parser
//!
//! Shared sample exports in the layouts different platforms produce.

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;

/// Convert string literals into an owned header or row
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Japanese-header export with quoted amounts and a guest column
pub fn create_japanese_export() -> String {
    "スペース名,利用日,開始時間,終了時間,金額,入金額,ゲスト名\r\n\
     渋谷会議室A,2024/3/1,9:00,12:00,\"¥12,000\",\"¥10,800\",山田\r\n\
     渋谷会議室A,2024年3月2日,13:00,18:00,\"¥20,000\",\"¥18,000\",佐藤\r\n\
     \r\n\
     新宿スタジオ,2024-03-03,10:00,11:30,5500,4950,\r\n"
        .to_string()
}

/// English-header export with a few malformed cells
pub fn create_english_export() -> String {
    "Listing,Date,Start Time,End Time,Total,Payout,Guest\n\
     \"Loft, Room 2\",03/01/2024,morning,21:00,\"$1,200\",900,\"Smith, J\"\n\
     Loft Room 3,2024-02-30,8:15,10:00:00,300,,\n"
        .to_string()
}

/// Helper to create a temporary file with given bytes
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
