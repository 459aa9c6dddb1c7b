use as2_reader::As2Index;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-abk-file>", args[0]);
        std::process::exit(1);
    }

    let abk_path = &args[1];
    println!("Reading AS/2 archive: {}", abk_path);
    println!("{}", "=".repeat(60));

    match As2Index::from_archive(abk_path) {
        Ok(index) => {
            let header = &index.header;

            println!("\nPackage Information:");
            println!("  Friendly name: {}", header.abk_friendly_name);
            println!("  Folder title: {}", header.folder_title);
            println!("  Long pack name: {}", header.long_pack_name);
            println!("  Pack directory: {}", header.pack_dir);
            println!("  Version: {} (revision {})", header.version, header.revision);
            println!("  Pack version: {}", header.pack_version);
            println!("  Last backup: {}", header.last_backup_date);
            println!("  Last edit: {}", header.last_edit_date);
            println!("  Period end: {}", header.period_end_date);
            if !header.decrypted_password.is_empty() {
                println!("  Password: {}", header.decrypted_password);
            }

            println!("\nOutline ({} records):", index.records.len());
            for record in &index.records {
                let indent = "  ".repeat(record.tree_level.max(0) as usize);
                println!(
                    "  {}{} [{}] {}",
                    indent, record.index, record.reference, record.title
                );
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read AS/2 archive");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
