use futures::TryStreamExt;
use webhdfs_provider::{Endpoint, WebHdfsFileProvider};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let endpoint = Endpoint::parse("http://localhost:9870")?;
    let provider = WebHdfsFileProvider::new(endpoint);

    let info = provider.get_file_info("/tmp").await?;
    println!(
        "{}: exists={} dir={} len={} modified={}",
        info.path(),
        info.exists(),
        info.is_directory(),
        info.len(),
        info.last_modified()
    );

    let contents = provider.get_directory_contents("/tmp").await?;
    if contents.exists() {
        let mut entries = contents.entries().await?;
        while let Some(child) = entries.try_next().await? {
            println!("  {} ({} bytes)", child.name(), child.len());
        }
    } else {
        println!("/tmp is not a directory on this endpoint");
    }

    Ok(())
}
