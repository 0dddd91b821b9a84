use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use street_food_tracker::config::Settings;
use street_food_tracker::models::{FilterCriteria, SortOrder, StatusFilter, TypeFilter, Vendor, VendorForm, VendorId};
use street_food_tracker::services::VendorService;
use street_food_tracker::storage::{FileStorage, VendorRepository};

#[derive(Parser, Debug)]
#[command(name = "street-food-tracker", about = "Track street-food vendors")]
struct Cli {
    /// Overrides `storage.dir` from the settings
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show vendors, filtered and sorted by report time
    List {
        #[arg(long = "type", default_value = "all")]
        vendor_type: String,
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "desc")]
        order: SortOrder,
    },
    /// Add a vendor
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "type", default_value = "")]
        vendor_type: String,
        #[arg(long)]
        location: String,
        /// e.g. "11 AM - 3 PM"
        #[arg(long)]
        hours: String,
        #[arg(long, default_value = "")]
        menu: String,
        /// 1-5; anything else is ignored
        #[arg(long, allow_negative_numbers = true)]
        rating: Option<i64>,
    },
    /// Edit a vendor; omitted fields keep their current values
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "type")]
        vendor_type: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        hours: Option<String>,
        #[arg(long)]
        menu: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        rating: Option<i64>,
    },
    /// Delete a vendor after confirmation
    Delete {
        id: String,
        /// Confirm without prompting
        #[arg(long)]
        yes: bool,
    },
    /// List the vendor types in use
    Types,
    /// Clear stored vendors and start over from the sample set
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::new().context("Failed to load settings")?;
    if let Some(dir) = cli.data_dir {
        settings.storage.dir = dir;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let storage = FileStorage::new(&settings.storage.dir);
    let repository = VendorRepository::new(storage, settings.storage.key.clone());
    let mut service = VendorService::new(repository);

    match cli.command {
        Command::List { vendor_type, status, search, order } => {
            let criteria = FilterCriteria {
                vendor_type: TypeFilter::from(vendor_type.as_str()),
                status,
                search,
            };
            let view = service.view(&criteria, order);
            if view.is_empty() {
                println!("No vendors match your criteria.");
            }
            for vendor in &view {
                print_vendor(vendor, service.status_label(vendor));
            }
            println!("Sorted by time ({}); use --order {} to flip", order.label(), order.toggle());
        }
        Command::Add { name, vendor_type, location, hours, menu, rating } => {
            let mut form = VendorForm { name, vendor_type, location, hours, menu, rating: None };
            if let Some(rating) = rating {
                form.set_rating(rating);
            }
            let vendor = service.create(&form)?;
            println!("Vendor added! {}", vendor.id);
        }
        Command::Edit { id, name, vendor_type, location, hours, menu, rating } => {
            let id = VendorId::from(id);
            let current = service
                .get(&id)
                .with_context(|| format!("No vendor with id {}", id))?;
            let mut form = VendorForm::from_vendor(current);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(vendor_type) = vendor_type {
                form.vendor_type = vendor_type;
            }
            if let Some(location) = location {
                form.location = location;
            }
            if let Some(hours) = hours {
                form.hours = hours;
            }
            if let Some(menu) = menu {
                form.menu = menu;
            }
            if let Some(rating) = rating {
                form.set_rating(rating);
            }
            service.submit(&form, Some(&id))?;
            println!("Vendor updated!");
        }
        Command::Delete { id, yes } => {
            let candidate = service.request_delete(&VendorId::from(id))?;
            let name = candidate.name.clone();
            if yes || confirm(&name)? {
                service.confirm_delete()?;
                println!("Vendor deleted!");
            } else {
                service.cancel_delete();
                println!("Cancelled.");
            }
        }
        Command::Types => {
            for vendor_type in service.types() {
                println!("{}", vendor_type);
            }
        }
        Command::Reset => {
            service.reset()?;
            println!("Restored {} sample vendors.", service.vendors().len());
        }
    }

    Ok(())
}

fn confirm(name: &str) -> Result<bool> {
    print!("Are you sure you want to delete {}? This action cannot be undone. [y/N] ", name);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn print_vendor(vendor: &Vendor, status: &str) {
    let stars: String = (1..=5u8)
        .map(|star| if vendor.rating >= star { '*' } else { '.' })
        .collect();

    println!("{}  {}", vendor.id, vendor.name);
    if !vendor.vendor_type.is_empty() {
        println!("    type:     {}", vendor.vendor_type);
    }
    println!("    location: {}", vendor.location);
    println!("    hours:    {} ({})", vendor.hours, status);
    if !vendor.menu.is_empty() {
        println!("    menu:     {}", vendor.menu);
    }
    println!("    rating:   {}", stars);
    println!(
        "    reported: {}",
        vendor.reported_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
    );
}
