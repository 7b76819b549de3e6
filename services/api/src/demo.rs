use crate::infra::parse_label;
use clap::Args;
use decision_support::analysis::{
    form_catalog, score, AnalysisView, CaseAttributes, CaseAttributesDraft, County, CourtType,
    PendingCases, PriorConvictions, SupervisionStatus, TopCharge,
};
use decision_support::error::AppError;
use decision_support::session::{Screen, Session, SessionError, Transition};

const BAR_WIDTH: usize = 20;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// County name, e.g. "Bronx" or "New York"
    #[arg(long, value_parser = parse_label::<County>)]
    pub(crate) county: County,
    /// Court type: "Local" or "Superior"
    #[arg(long, value_parser = parse_label::<CourtType>)]
    pub(crate) court_type: CourtType,
    /// Top charge at arraignment, e.g. "PL 120.00 - Assault 3rd"
    #[arg(long, value_parser = parse_label::<TopCharge>)]
    pub(crate) top_charge: TopCharge,
    /// Pending cases at arraignment, e.g. "No open cases"
    #[arg(long, value_parser = parse_label::<PendingCases>)]
    pub(crate) pending_cases: PendingCases,
    /// Supervision status at arraignment: "Null", "Yes", or "No"
    #[arg(long, value_parser = parse_label::<SupervisionStatus>)]
    pub(crate) on_supervision: SupervisionStatus,
    /// Prior convictions, e.g. "Prior VFO"
    #[arg(long, value_parser = parse_label::<PriorConvictions>)]
    pub(crate) prior_convictions: PriorConvictions,
    /// Print the results view as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Username entered on the sign-in screen
    #[arg(long, default_value = "demo.analyst")]
    pub(crate) username: String,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let attributes = CaseAttributes {
        county: args.county,
        court_type: args.court_type,
        top_charge: args.top_charge,
        pending_cases: args.pending_cases,
        on_supervision: args.on_supervision,
        prior_convictions: args.prior_convictions,
    };
    let view = score(&attributes).view();

    if args.json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Results payload unavailable: {err}"),
        }
    } else {
        render_results(&view);
    }
    Ok(())
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    for field in form_catalog() {
        println!("{} (--{})", field.label, field.field.key().replace('_', "-"));
        for option in &field.options {
            if option.label == option.value {
                println!("  - {}", option.value);
            } else {
                println!("  - {} ({})", option.value, option.label);
            }
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut session = Session::new();
    print_screen(&session);

    if session.sign_in("   ")? == Transition::Ignored {
        println!("- Blank username submitted: nothing happens");
    }
    println!("- Signing in as {}", args.username);
    session.sign_in(&args.username)?;
    print_screen(&session);

    if let (Some(username), Some(signed_in_at)) = (session.username(), session.signed_in_at()) {
        println!(
            "Signed in as {} at {}",
            username,
            signed_in_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
        );
    }
    for field in form_catalog() {
        println!("  {}: {}", field.label, field.placeholder);
    }

    let draft = demo_draft();
    let partial = CaseAttributesDraft {
        on_supervision: String::new(),
        prior_convictions: String::new(),
        ..draft.clone()
    };
    println!("- Submitting with two fields left blank");
    match session.submit(&partial) {
        Err(SessionError::Incomplete(err)) => {
            let missing: Vec<_> = err.missing.iter().map(|field| field.label()).collect();
            println!("  Notice: {} (missing: {})", err, missing.join(", "));
        }
        Err(err) => return Err(err.into()),
        Ok(_) => println!("  Unexpectedly accepted an incomplete form"),
    }

    println!("- Submitting the completed form");
    let view = session.submit(&draft)?.view();
    print_screen(&session);
    render_results(&view);

    println!("- Back to case parameters");
    session.back()?;
    print_screen(&session);
    let prefilled = session.form_draft();
    println!("  Form keeps the last submission: {}", prefilled.top_charge);

    println!("- Signing out");
    session.sign_out();
    print_screen(&session);
    Ok(())
}

fn demo_draft() -> CaseAttributesDraft {
    CaseAttributesDraft {
        county: "Bronx".to_string(),
        court_type: "Local".to_string(),
        top_charge: "PL 120.00 - Assault 3rd".to_string(),
        pending_cases: "No open cases".to_string(),
        on_supervision: "No".to_string(),
        prior_convictions: "No prior convictions".to_string(),
    }
}

fn print_screen(session: &Session) {
    let screen = session.screen();
    println!("\n== {} [{}] ==", screen.title(), screen);
    if screen == Screen::SignedOut {
        println!("Enter a username to continue");
    }
}

fn render_results(view: &AnalysisView) {
    println!("Case summary");
    for row in &view.case_summary {
        println!("  {}: {}", row.field_label, row.value);
    }

    for category in &view.categories {
        println!("\n{}", category.title);
        for bar in &category.bars {
            println!(
                "  {:<32} {:<width$} {:>6}",
                bar.label,
                bar_fill(bar.rounded),
                bar.display,
                width = BAR_WIDTH
            );
        }
        println!("  {}", category.summary);
    }

    println!("\nDisclaimer: {}", view.disclaimer);
}

fn bar_fill(rounded: u8) -> String {
    let filled = usize::from(rounded) * BAR_WIDTH / 100;
    "#".repeat(filled)
}
