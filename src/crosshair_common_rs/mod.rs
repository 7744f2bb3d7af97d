//! Crosshair 共通ライブラリ
//! 共有コードのコーデックと、CLI・エディタ向けのユーティリティ

pub mod sharecode;
pub mod utils;
