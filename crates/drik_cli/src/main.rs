use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use drik_config::{Config, parse_solar_calendar};
use drik_panchanga::{
    gregorian_to_hindu, jd_to_local_hms, masa_for_date, month_panchanga, sun_sidereal_longitude,
    tithi_at_sunrise,
};
use drik_time::{calendar_to_jd, weekday};
use drik_vedic_base::{Location, Paksha, Rashi, ayanamsha_deg, sunrise, sunset, tithi_name};

const DOW_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Parser)]
#[command(name = "drik", about = "Drik Siddhanta panchanga and regional solar calendars")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    observer: ObserverArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ObserverArgs {
    /// Observer latitude in degrees north.
    #[arg(long, global = true)]
    lat: Option<f64>,
    /// Observer longitude in degrees east.
    #[arg(long, global = true)]
    lon: Option<f64>,
    /// Observer altitude in meters.
    #[arg(long, global = true)]
    alt: Option<f64>,
    /// UTC offset of the civil clock in hours.
    #[arg(long, global = true)]
    tz: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchanga for one civil day
    Panchang {
        /// Date as YYYY-MM-DD
        date: String,
    },
    /// Panchanga table for a whole Gregorian month
    Month {
        /// Month as YYYY-MM
        month: String,
    },
    /// Tithi at sunrise for one civil day
    Tithi {
        /// Date as YYYY-MM-DD
        date: String,
    },
    /// Lunar month (masa) for one civil day
    Masa {
        /// Date as YYYY-MM-DD
        date: String,
    },
    /// Regional solar date for one civil day
    Solar {
        /// Date as YYYY-MM-DD
        date: String,
        /// Calendar: tamil, bengali, odia, malayalam
        /// (default: the configured calendar, tamil out of the box)
        #[arg(long)]
        calendar: Option<String>,
    },
    /// Sunrise and sunset for one civil day
    Sun {
        /// Date as YYYY-MM-DD
        date: String,
    },
    /// Lahiri ayanamsha and sidereal solar longitude at 0h UT
    Ayanamsha {
        /// Date as YYYY-MM-DD
        date: String,
    },
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got '{s}'"));
    }
    let year: i32 = parts[0].parse().map_err(|_| format!("bad year in '{s}'"))?;
    let month: u32 = parts[1].parse().map_err(|_| format!("bad month in '{s}'"))?;
    let day: u32 = parts[2].parse().map_err(|_| format!("bad day in '{s}'"))?;
    if !(1..=12).contains(&month) {
        return Err(format!("month {month} out of range"));
    }
    if !(1..=31).contains(&day) {
        return Err(format!("day {day} out of range"));
    }
    Ok((year, month, day))
}

fn parse_month(s: &str) -> Result<(i32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM, got '{s}'"));
    }
    let year: i32 = parts[0].parse().map_err(|_| format!("bad year in '{s}'"))?;
    let month: u32 = parts[1].parse().map_err(|_| format!("bad month in '{s}'"))?;
    if !(1..=12).contains(&month) {
        return Err(format!("month {month} out of range"));
    }
    Ok((year, month))
}

fn fmt_local(jd_ut: f64, loc: &Location) -> String {
    let (h, m, s) = jd_to_local_hms(jd_ut, loc.utc_offset_hours);
    format!("{h:02}:{m:02}:{s:02}")
}

fn print_day_panchang(year: i32, month: u32, day: u32, loc: &Location) {
    let jd = calendar_to_jd(year, month, day as f64);
    let hd = gregorian_to_hindu(year, month, day, loc);
    let ti = tithi_at_sunrise(year, month, day, loc);
    let rise = sunrise(jd, loc);
    let set = sunset(jd, loc);

    println!(
        "Date:       {year:04}-{month:02}-{day:02} ({})",
        DOW_NAMES[weekday(jd) as usize]
    );
    match rise {
        drik_vedic_base::RiseSetResult::Event(jd_rise) => {
            println!("Sunrise:    {}", fmt_local(jd_rise, loc));
        }
        drik_vedic_base::RiseSetResult::Circumpolar => println!("Sunrise:    none (polar day/night)"),
    }
    match set {
        drik_vedic_base::RiseSetResult::Event(jd_set) => {
            println!("Sunset:     {}", fmt_local(jd_set, loc));
        }
        drik_vedic_base::RiseSetResult::Circumpolar => println!("Sunset:     none (polar day/night)"),
    }
    println!(
        "Tithi:      {} {} (ends {})",
        hd.paksha.name(),
        tithi_name(ti.tithi_num),
        fmt_local(ti.jd_end, loc)
    );
    let adhika = if hd.is_adhika_masa { "Adhika " } else { "" };
    println!(
        "Hindu Date: {adhika}{} {} {}, Saka {} (Vikram {})",
        hd.masa.name(),
        hd.paksha.name(),
        hd.tithi,
        hd.year_saka,
        hd.year_vikram
    );
    if ti.is_kshaya {
        println!("Note:       kshaya (the next tithi is skipped)");
    }
    if hd.is_adhika_tithi {
        println!("Note:       adhika tithi (same tithi as the previous day)");
    }
}

fn print_month(year: i32, month: u32, loc: &Location) {
    let days = month_panchanga(year, month, loc);
    println!(
        "{:<12} {:<4} {:<9} {:<24} {}",
        "Date", "Day", "Sunrise", "Tithi", "Hindu Date"
    );
    for pd in &days {
        let jd = calendar_to_jd(pd.greg_year, pd.greg_month, pd.greg_day as f64);
        let dow = &DOW_NAMES[weekday(jd) as usize][..3];
        let paksha_char = if pd.tithi.paksha == Paksha::Shukla { "S" } else { "K" };
        let adhika = if pd.hindu_date.is_adhika_masa { "Adhika " } else { "" };
        println!(
            "{:04}-{:02}-{:02}   {:<4} {:<9} {:<24} {adhika}{}, Saka {}",
            pd.greg_year,
            pd.greg_month,
            pd.greg_day,
            dow,
            fmt_local(pd.jd_sunrise, loc),
            format!(
                "{} {} ({}-{})",
                pd.tithi.paksha.name(),
                tithi_name(pd.tithi.tithi_num),
                paksha_char,
                pd.tithi.paksha_tithi
            ),
            pd.hindu_date.masa.name(),
            pd.hindu_date.year_saka
        );
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    config.apply_overrides(
        cli.observer.lat,
        cli.observer.lon,
        cli.observer.alt,
        cli.observer.tz,
    );
    let loc = config.location();

    match cli.command {
        Commands::Panchang { date } => {
            let (y, m, d) = parse_date(&date)?;
            print_day_panchang(y, m, d, &loc);
        }
        Commands::Month { month } => {
            let (y, m) = parse_month(&month)?;
            print_month(y, m, &loc);
        }
        Commands::Tithi { date } => {
            let (y, m, d) = parse_date(&date)?;
            let ti = tithi_at_sunrise(y, m, d, &loc);
            println!(
                "{} {} ({}-{}), from {} to {}{}",
                ti.paksha.name(),
                tithi_name(ti.tithi_num),
                if ti.paksha == Paksha::Shukla { "S" } else { "K" },
                ti.paksha_tithi,
                fmt_local(ti.jd_start, &loc),
                fmt_local(ti.jd_end, &loc),
                if ti.is_kshaya { " [kshaya follows]" } else { "" }
            );
        }
        Commands::Masa { date } => {
            let (y, m, d) = parse_date(&date)?;
            let mi = masa_for_date(y, m, d, &loc);
            let adhika = if mi.is_adhika { "Adhika " } else { "" };
            println!(
                "{adhika}{}, Saka {} / Vikram {}",
                mi.masa.name(),
                mi.year_saka,
                mi.year_vikram
            );
        }
        Commands::Solar { date, calendar } => {
            let (y, m, d) = parse_date(&date)?;
            let cal = match calendar.as_deref() {
                Some(name) => parse_solar_calendar(name)
                    .ok_or_else(|| format!("unknown calendar '{name}'"))?,
                None => config.solar_calendar,
            };
            let sd = drik_panchanga::gregorian_to_solar(y, m, d, &loc, cal);
            println!(
                "{} {}, {} {} (Sun in {}; month opened by the sankranti at {})",
                cal.month_name(sd.month),
                sd.day,
                cal.era_name(),
                sd.year,
                Rashi::from_number(sd.rashi).name(),
                fmt_local(sd.jd_sankranti, &loc)
            );
        }
        Commands::Sun { date } => {
            let (y, m, d) = parse_date(&date)?;
            let jd = calendar_to_jd(y, m, d as f64);
            match sunrise(jd, &loc) {
                drik_vedic_base::RiseSetResult::Event(r) => {
                    println!("Sunrise: {}", fmt_local(r, &loc))
                }
                drik_vedic_base::RiseSetResult::Circumpolar => println!("Sunrise: none"),
            }
            match sunset(jd, &loc) {
                drik_vedic_base::RiseSetResult::Event(s) => {
                    println!("Sunset:  {}", fmt_local(s, &loc))
                }
                drik_vedic_base::RiseSetResult::Circumpolar => println!("Sunset:  none"),
            }
        }
        Commands::Ayanamsha { date } => {
            let (y, m, d) = parse_date(&date)?;
            let jd = calendar_to_jd(y, m, d as f64);
            println!("Ayanamsha (Lahiri):  {:.6} deg", ayanamsha_deg(jd));
            println!("Sidereal Sun:        {:.6} deg", sun_sidereal_longitude(jd));
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}
