use anyhow::Result;
use tracing::Level;

use treefs::{Children, Node, TreeFS};

fn main() -> Result<()> {
    setup_tracing();

    let mut fs = TreeFS::new();

    // create a directory chain; missing parents appear on the fly
    fs.mkdir("/docs/guides", false)?;

    // already there, but exists_ok waves it through
    fs.mkdir("/docs", true)?;

    // an empty file, then a file written by appending
    fs.touch("/docs/todo.txt")?;
    fs.append("/docs/guides/intro.txt", "Hello")?;
    fs.append("/docs/guides/intro.txt", ", World!")?;

    assert_eq!(fs.read("/docs/guides/intro.txt")?, "Hello, World!");

    // listings come back sorted by name
    assert_eq!(fs.ls("/docs")?, vec!["guides", "todo.txt"]);

    // a file argument lists as itself
    assert_eq!(fs.ls("/docs/todo.txt")?, vec!["todo.txt"]);

    println!("{}", fs);

    // start over with a pre-built tree
    let mut root = Children::new();
    root.insert("readme.md".to_string(), Node::file("fresh start"));
    fs.reset(root);

    println!("after reset:\n{}", fs);

    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .without_time()
        .compact()
        .init();
}
