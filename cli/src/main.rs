use clap::Parser;
use owo_colors::OwoColorize;

use risk_odds_core as core;

#[derive(Debug, Parser)]
#[command(about = "Calculate the probability of winning a territory in RISK")]
struct Args {
    /// Number of attacking troops
    #[arg(value_name = "N_ATTACK", allow_negative_numbers = true)]
    attack: i64,

    /// Number of defending troops
    #[arg(value_name = "N_DEFEND", allow_negative_numbers = true)]
    defend: i64,

    /// Print the roll tables used and every round of a simulated battle
    #[arg(long, short)]
    verbose: bool,

    /// Scan all combinations from (1, 1) to (N_ATTACK, N_DEFEND)
    #[arg(long, short)]
    scan: bool,

    /// Print the outcome tables of all 6 possible rolls
    #[arg(long, short)]
    roll: bool,

    /// Simulate a single battle instead of calculating the probability
    #[arg(long, short, conflicts_with = "scan")]
    battle: bool,

    /// Set seed for the battle RNG
    #[arg(long, requires = "battle")]
    seed: Option<core::Seed>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.roll {
        print_roll_tables();
    }

    if args.battle {
        let mut rng = match args.seed {
            Some(seed) => core::Rng::with_seed(seed),
            None => core::Rng::new(),
        };
        battle(&args, &mut rng)?;
        return Ok(());
    }

    if args.scan {
        let scan = core::scan(args.attack, args.defend)?;
        if !scan.entries.is_empty() {
            println!("{scan}");
        }
    } else {
        let probability = core::win_probability(args.attack, args.defend)?;
        if args.verbose {
            print_first_round(args.attack, args.defend)?;
        }
        println!("Prob({}, {}) = {probability:.6e}", args.attack, args.defend);
    }

    if args.verbose {
        core::shared_metrics().print_report();
    }

    Ok(())
}

// single defending die first, then two, each with the attacker's dice ascending
const ROLL_TABLE_ORDER: [core::Shape; 6] = [
    core::Shape::OneVsOne,
    core::Shape::TwoVsOne,
    core::Shape::ThreeVsOne,
    core::Shape::OneVsTwo,
    core::Shape::TwoVsTwo,
    core::Shape::ThreeVsTwo,
];

fn print_roll_tables() {
    for shape in ROLL_TABLE_ORDER {
        println!("{}", core::outcome_distribution(shape));
    }
}

fn print_first_round(attack: i64, defend: i64) -> anyhow::Result<()> {
    let shape = core::Shape::for_troops(u32::try_from(attack)?, u32::try_from(defend)?);
    match shape {
        Some(shape) => println!("{}", core::outcome_distribution(shape)),
        None => println!("No rounds to fight"),
    }
    Ok(())
}

fn battle(args: &Args, rng: &mut core::Rng) -> anyhow::Result<()> {
    let battle = core::Battle::new(args.attack, args.defend)?;

    if args.verbose {
        if let Some(seed) = rng.initial_seed() {
            println!("{} {seed}", " SEED ".black().on_purple());
        }
        println!(
            "{} {} attacking {}",
            " BATTLE ".black().on_yellow(),
            battle.attackers(),
            battle.defenders()
        );
    }

    let report = battle.run(rng);

    if args.verbose {
        print_events(&report.events);
    }

    match report.winner {
        core::Side::Attacker => println!("{}", "Attacker Wins!!!".green()),
        core::Side::Defender => println!("{}", "Defender Wins!!!".red()),
    }
    println!("Attacker has {} troops remaining", report.remaining);

    Ok(())
}

fn print_events(events: &[core::Event]) {
    for event in events {
        match event {
            core::Event::Fight {
                attackers,
                defenders,
            } => {
                println!("FIGHT! {attackers} attacking {defenders}");
            }
            core::Event::Round(round) => {
                println!("  Attacker rolls: {:?}", round.attack_roll.as_slice());
                println!("  Defender rolls: {:?}", round.defend_roll.as_slice());
                for (attack, defend, loser) in round.comparisons() {
                    println!("  Comparing Attack={attack}  Defend={defend}  ----> {loser} loses 1 troop!");
                }
                println!(
                    "         Lost Troops: Attacking={}  Defending={}",
                    round.losses.attacker, round.losses.defender
                );
            }
            core::Event::Over { .. } => {}
        }
    }
}
