use clap::Parser;
use folio::application::{
    init::init, BuildService, ConfigService, ListPostsService, ListSnippetsService,
    ListTagsService, ShowService,
};
use folio::cli::output::{format_post, format_snippet};
use folio::cli::{
    format_post_list, format_snippet_list, format_tag_list, init_logging, Cli, Commands,
};
use folio::error::FolioError;
use folio::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), FolioError> {
    match cli.command {
        Some(Commands::Init {
            path,
            title,
            author,
        }) => init(&path, &title, &author),
        Some(Commands::Posts { filter, limit }) => {
            let service = ListPostsService::new(FileSystemRepository::discover()?);
            let listing = service.execute(&filter.to_query(), limit)?;
            print!("{}", format_post_list(&listing.posts));
            Ok(())
        }
        Some(Commands::Snippets { filter }) => {
            let service = ListSnippetsService::new(FileSystemRepository::discover()?);
            let snippets = service.execute(&filter.to_query())?;
            print!("{}", format_snippet_list(&snippets));
            Ok(())
        }
        Some(Commands::Tags) => {
            let service = ListTagsService::new(FileSystemRepository::discover()?);
            let tags = service.execute()?;
            print!("{}", format_tag_list(&tags));
            Ok(())
        }
        Some(Commands::Show { slug, snippet }) => {
            let service = ShowService::new(FileSystemRepository::discover()?);
            if snippet {
                print!("{}", format_snippet(&service.snippet(&slug)?));
            } else {
                print!("{}", format_post(&service.post(&slug)?));
            }
            Ok(())
        }
        Some(Commands::Build { out }) => {
            let service = BuildService::new(FileSystemRepository::discover()?);
            let report = service.execute(out)?;
            println!(
                "Built {} pages ({} posts, {} snippets) into {}",
                report.files.len(),
                report.posts,
                report.snippets,
                report.output_dir.display()
            );
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("title = {}", config.title);
                println!("author = {}", config.author);
                println!("description = {}", config.description);
                println!("site_url = {}", config.site_url);
                println!("content_dir = {}", config.content_dir);
                println!("output_dir = {}", config.output_dir);
                println!("recent_posts = {}", config.recent_posts);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: folio config [--list | <key> [<value>]]");
                println!("Valid keys: title, author, description, site_url, content_dir, output_dir, recent_posts, created");
                Ok(())
            }
        }
        None => {
            println!("folio - Content engine for a personal developer blog");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
