//! Async comparisons with tokio.
//!
//! Compares several file pairs concurrently. Each comparison owns its own
//! buffers, so nothing is shared between the tasks.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io

use streameq::{CompareConfig, compare_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("streameq-demo");
    tokio::fs::create_dir_all(&dir).await?;

    let base: Vec<u8> = (0..1_000_000).map(|i| (i % 251) as u8).collect();
    let mut flipped = base.clone();
    flipped[999_999] ^= 0xFF;

    let variants: Vec<(&str, Vec<u8>)> = vec![
        ("same", base.clone()),
        ("last-byte", flipped),
        ("truncated", base[..999_000].to_vec()),
    ];

    let original = dir.join("original.bin");
    tokio::fs::write(&original, &base).await?;

    let mut handles = Vec::new();
    for (name, content) in variants {
        let path = dir.join(format!("{}.bin", name));
        tokio::fs::write(&path, &content).await?;

        let original = original.clone();
        handles.push(tokio::spawn(async move {
            let a = tokio::fs::File::open(&original).await?;
            let b = tokio::fs::File::open(&path).await?;
            let equal = compare_async(a.compat(), b.compat(), CompareConfig::default()).await?;
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>((name, equal))
        }));
    }

    for handle in handles {
        let (name, equal) = handle.await?.map_err(|e| e.to_string())?;
        let verdict = if equal { "identical" } else { "different" };
        println!("{:>10}: {}", name, verdict);
    }

    tokio::fs::remove_dir_all(&dir).await?;
    Ok(())
}
