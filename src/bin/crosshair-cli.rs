use clap::{Parser, Subcommand};
use log::{debug, info};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crosshair_sharecode::crosshair_common_rs::sharecode::core::alphabet::decode_token;
use crosshair_sharecode::crosshair_common_rs::sharecode::core::checksum::verify_checksum8;
use crosshair_sharecode::crosshair_common_rs::sharecode::core::bit_utils::unpack_fields;
use crosshair_sharecode::crosshair_common_rs::sharecode::core::PAYLOAD_BYTES;
use crosshair_sharecode::crosshair_common_rs::sharecode::schema::{schema, FieldValue};
use crosshair_sharecode::crosshair_common_rs::sharecode::SharecodeError;
use crosshair_sharecode::crosshair_common_rs::sharecode::types::{
    Alpha, Color, CrosshairConfig, Gap, Size, Style, Thickness,
};
use crosshair_sharecode::crosshair_common_rs::utils::{
    init_logging, ConfigLoader, CrosshairToolConfig, OutputFormat,
};
use crosshair_sharecode::{decode, encode};

#[derive(Parser)]
#[command(name = "crosshair-cli")]
#[command(about = "Crosshair Sharecode - クロスヘア共有コードツール")]
#[command(version = "0.1.0")]
#[command(long_about = "
Crosshair Sharecode ツール

クロスヘア設定と共有コード (AAAA-AAAA-AAAA) を相互に変換します：
- encode:    設定から共有コードを生成
- decode:    共有コードから設定を復元
- inspect:   共有コードのビット構成を表示
- defaults:  エディタ初期値と対応するコードを表示
- config:    有効な設定を表示
")]
struct Cli {
    /// 設定ファイルのパス
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// デバッグモード
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 設定から共有コードを生成
    #[command(alias = "e")]
    Encode {
        /// JSONファイルから設定を読み込む
        #[arg(long)]
        from_json: Option<PathBuf>,
        /// スタイル (0-5)
        #[arg(long)]
        style: Option<u8>,
        /// サイズ (1.0-5.0, 0.5刻み)
        #[arg(long)]
        size: Option<f64>,
        /// 隙間 (-5〜5)
        #[arg(long, allow_negative_numbers = true)]
        gap: Option<i8>,
        /// 太さ (0.0-3.0, 0.5刻み)
        #[arg(long)]
        thickness: Option<f64>,
        /// アウトラインを有効化
        #[arg(long, overrides_with = "no_outline")]
        outline: bool,
        /// アウトラインを無効化
        #[arg(long)]
        no_outline: bool,
        /// センタードットを有効化
        #[arg(long, overrides_with = "no_dot")]
        dot: bool,
        /// センタードットを無効化
        #[arg(long)]
        no_dot: bool,
        /// 色 (#RRGGBB)
        #[arg(long)]
        color: Option<Color>,
        #[arg(long)] red: Option<u8>,
        #[arg(long)] green: Option<u8>,
        #[arg(long)] blue: Option<u8>,
        /// 不透明度 (0-255)
        #[arg(long)]
        alpha: Option<f64>,
        /// 区切りなしで出力
        #[arg(long)]
        compact: bool,
    },
    /// 共有コードから設定を復元
    #[command(alias = "d")]
    Decode {
        /// 共有コード
        code: String,
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },
    /// 共有コードのビット構成を表示
    Inspect {
        /// 共有コード
        code: String,
    },
    /// エディタ初期値と対応する共有コードを表示
    Defaults,
    /// 有効な設定を表示
    Config {
        /// 設定を表形式で表示
        #[arg(short, long)]
        table: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<CrosshairToolConfig, Box<dyn Error>> {
    let loader = ConfigLoader::new();
    let config = match path {
        Some(p) => loader.load_from(p)?,
        None => loader.load()?,
    };
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    if let Err(e) = init_logging(&config.logging, cli.debug) {
        eprintln!("ロガーの初期化に失敗しました: {}", e);
    }
    debug!("Effective config: {:?}", config);

    match cli.command {
        Commands::Encode {
            from_json,
            style,
            size,
            gap,
            thickness,
            outline,
            no_outline,
            dot,
            no_dot,
            color,
            red,
            green,
            blue,
            alpha,
            compact,
        } => {
            let mut crosshair = match from_json {
                Some(path) => {
                    info!("Reading crosshair from {}", path.display());
                    serde_json::from_str::<CrosshairConfig>(&fs::read_to_string(&path)?)?
                }
                None => config.editor.defaults,
            };

            if let Some(v) = style { crosshair.style = Style::new(v)?; }
            if let Some(v) = size { crosshair.size = Size::new(v)?; }
            if let Some(v) = gap { crosshair.gap = Gap::new(v)?; }
            if let Some(v) = thickness { crosshair.thickness = Thickness::new(v)?; }
            if outline { crosshair.outline_enabled = true; }
            if no_outline { crosshair.outline_enabled = false; }
            if dot { crosshair.dot_enabled = true; }
            if no_dot { crosshair.dot_enabled = false; }
            if let Some(v) = color { crosshair.color = v; }
            if let Some(v) = red { crosshair.color.red = v; }
            if let Some(v) = green { crosshair.color.green = v; }
            if let Some(v) = blue { crosshair.color.blue = v; }
            if let Some(v) = alpha { crosshair.alpha = Alpha::new(v)?; }

            let code = encode(&crosshair)?;
            if compact || config.output.compact {
                println!("{}", code.replace('-', ""));
            } else {
                println!("{}", code);
            }
        }

        Commands::Decode { code, json } => {
            let crosshair = decode(&code).map_err(|e| hint_unreadable(&code, e))?;
            if json || config.output.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&crosshair)?);
            } else {
                print_crosshair(&crosshair);
            }
        }

        Commands::Inspect { code } => {
            inspect(&code)?;
        }

        Commands::Defaults => {
            let defaults = config.editor.defaults;
            print_crosshair(&defaults);
            println!("コード: {}", encode(&defaults)?);
        }

        Commands::Config { table } => {
            if table {
                let defaults = &config.editor.defaults;
                println!("{:<24} {}", "editor.defaults", encode(defaults)?);
                println!("{:<24} {}", "output.compact", config.output.compact);
                println!("{:<24} {:?}", "output.format", config.output.format);
                println!("{:<24} {}", "logging.level", config.logging.level);
                println!("{:<24} {}", "logging.timestamps", config.logging.timestamps);
            } else {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn print_crosshair(crosshair: &CrosshairConfig) {
    println!("スタイル:       {}", crosshair.style.0);
    println!("サイズ:         {:.1}", crosshair.size.0);
    println!("隙間:           {}", crosshair.gap.0);
    println!("太さ:           {:.1}", crosshair.thickness.0);
    println!("アウトライン:   {}", if crosshair.outline_enabled { "ON" } else { "OFF" });
    println!("センタードット: {}", if crosshair.dot_enabled { "ON" } else { "OFF" });
    println!("色:             {} ({})", crosshair.color.to_hex(), crosshair.color.to_rgba_css(crosshair.alpha));
    println!("不透明度:       {}", crosshair.alpha.0);
}

/// 入力ミスによるエラーなら確認を促す一文を添える
fn hint_unreadable(code: &str, err: SharecodeError) -> SharecodeError {
    if err.is_decode_error() {
        eprintln!("共有コード '{}' を読み取れません。入力ミスがないか確認してください", code.trim());
    }
    err
}

// 各段階を個別に実行して途中経過を表示する
fn inspect(code: &str) -> Result<(), Box<dyn Error>> {
    let frame = decode_token(code).map_err(|e| hint_unreadable(code, e))?;
    println!("フレーム:       {}", hex::encode_upper(frame));
    println!("ペイロード:     {}", hex::encode_upper(&frame[..PAYLOAD_BYTES]));
    println!("チェックサム:   0x{:02X}", frame[PAYLOAD_BYTES]);

    let payload = verify_checksum8(&frame).map_err(|e| hint_unreadable(code, e))?;
    println!("✅ チェックサム一致\n");

    let schema = schema();
    let code_points = unpack_fields(&payload, &schema.widths())?;
    println!("{:<16} {:>6} {:>5} {:>6}  {}", "field", "offset", "bits", "code", "value");
    for (descriptor, &code_point) in schema.fields().iter().zip(code_points.iter()) {
        let value = match descriptor.dequantize(code_point) {
            Ok(FieldValue::Integer(v)) => v.to_string(),
            Ok(FieldValue::Decimal(v)) => format!("{:.1}", v),
            Ok(FieldValue::Flag(v)) => v.to_string(),
            Err(e) => format!("❌ {}", e),
        };
        println!(
            "{:<16} {:>6} {:>5} {:>6}  {}",
            descriptor.name(),
            descriptor.offset,
            descriptor.bit_width,
            code_point,
            value
        );
    }

    Ok(())
}
