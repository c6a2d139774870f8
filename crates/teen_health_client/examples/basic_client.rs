use teen_health_client::{
    GuidanceClient, GuidanceContext, Measurement, config::Config,
    http_client::ReqwestGuidanceClient,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: uses GROQ_API_KEY from env; without it the fallback record is printed
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(());
        }
    };
    let client = ReqwestGuidanceClient::new(&cfg);
    let ctx = GuidanceContext::assess(Measurement {
        age: 15,
        gender: "female".into(),
        height_cm: 162.0,
        weight_kg: 52.0,
    });
    println!("BMI {} ({})", ctx.bmi.value, ctx.bmi.category);
    let record = client.generate(&ctx).await;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
