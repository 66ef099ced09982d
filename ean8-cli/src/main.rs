use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ean8::{code, Ean8, Geometry};

/// EAN-8 barcode generator and reader for plain PBM bitmaps
#[derive(Parser)]
#[command(name = "ean8", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rasterize a code into a PBM file
    Encode {
        /// 8-digit EAN-8 code (last digit is the checksum)
        code: String,
        /// Output file path
        #[arg(short, long, default_value = "barcode.pbm")]
        output: String,
        /// Quiet-zone margin in pixels
        #[arg(long, default_value = "4")]
        margin: usize,
        /// Width of one module in pixels
        #[arg(long, default_value = "3")]
        module_width: usize,
        /// Bar height in pixels
        #[arg(long, default_value = "50")]
        height: usize,
        /// Overwrite the output file if it exists
        #[arg(short, long)]
        force: bool,
    },
    /// Scan PBM files and print the decoded digits
    Decode {
        /// Input PBM files
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Validate a code, or compute the check digit for a 7-digit prefix
    Check {
        /// 7 or 8 digit string
        code: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Encode { code, output, margin, module_width, height, force } => {
            cmd_encode(&code, &output, margin, module_width, height, force)
        }
        Command::Decode { files } => cmd_decode(&files),
        Command::Check { code } => cmd_check(&code),
    }
}

fn cmd_encode(
    code: &str,
    output: &str,
    margin: usize,
    module_width: usize,
    height: usize,
    force: bool,
) -> Result<()> {
    anyhow::ensure!(module_width >= 1, "--module-width must be at least 1");
    anyhow::ensure!(height >= 1, "--height must be at least 1");

    let code: Ean8 = code
        .parse()
        .with_context(|| format!("'{code}' is not a valid EAN-8 code"))?;

    if Path::new(output).exists() && !force {
        anyhow::bail!("{output} already exists, pass --force to overwrite");
    }

    let geom = Geometry { margin, module_width, bar_height: height };
    let bytes = ean8::encode(&code, geom);
    std::fs::write(output, bytes).with_context(|| format!("writing {output}"))?;
    println!("wrote {code} to {output}");
    Ok(())
}

fn cmd_decode(files: &[String]) -> Result<()> {
    let mut failures = 0usize;

    for file in files {
        let bytes = std::fs::read(file).with_context(|| format!("reading {file}"))?;
        match ean8::decode(&bytes) {
            Ok(result) => {
                println!("{file}: {result}");
                if !result.is_complete() {
                    eprintln!("  warning: some digit groups were not recognized");
                } else if !code::is_valid(&result.to_string()) {
                    eprintln!("  warning: decoded digits fail the checksum");
                }
            }
            Err(err) => {
                eprintln!("{file}: {err}");
                failures += 1;
            }
        }
    }

    anyhow::ensure!(failures == 0, "{failures} file(s) failed to decode");
    Ok(())
}

fn cmd_check(code: &str) -> Result<()> {
    match code.len() {
        7 => {
            let mut prefix = [0u8; 7];
            for (i, c) in code.chars().enumerate() {
                let d = c
                    .to_digit(10)
                    .with_context(|| format!("non-digit character '{c}' in prefix"))?;
                prefix[i] = d as u8;
            }
            let check = code::compute_check_digit(&prefix);
            println!("{code}{check}");
            Ok(())
        }
        _ => {
            let parsed: Ean8 = code
                .parse()
                .with_context(|| format!("'{code}' is not a valid EAN-8 code"))?;
            println!("{parsed} is valid");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ean8::{bitmap, scan};

    #[test]
    fn decode_reads_back_what_encode_writes() {
        let dir = std::env::temp_dir().join("ean8-cli-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roundtrip.pbm");

        let code: Ean8 = "96385074".parse().unwrap();
        let bytes = ean8::encode(&code, Geometry::default());
        std::fs::write(&path, &bytes).unwrap();

        let read = std::fs::read(&path).unwrap();
        let grid = bitmap::parse(&read).unwrap();
        let result = scan::scan(&grid).unwrap();
        assert_eq!(result.to_string(), "96385074");

        std::fs::remove_file(&path).unwrap();
    }
}
