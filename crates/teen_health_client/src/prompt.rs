//! Completion prompts for adolescent health guidance.

use crate::GuidanceContext;

/// System-role persona sent ahead of every guidance request.
pub const SYSTEM_PROMPT: &str = "You are an expert health educator specializing in adolescent biology and development. Provide evidence-based, age-appropriate health guidance. Always respond with valid JSON only.";

/// JSON shape the completion must follow. Mirrors `GuidanceRecord` field for field.
const RESPONSE_SHAPE: &str = r#"{
  "explanation": "biological explanation here",
  "nutrition": {
    "title": "Nutrition Plan",
    "calories": "calorie range",
    "foods_to_eat": ["food1", "food2", "food3"],
    "foods_to_limit": ["food1", "food2"],
    "meal_timing": "timing advice",
    "details": "detailed explanation"
  },
  "hydration": {
    "title": "Hydration Guidelines",
    "daily_amount": "amount in liters/cups",
    "importance": "why it matters",
    "tips": ["tip1", "tip2", "tip3"]
  },
  "sleep": {
    "title": "Sleep Recommendations",
    "hours": "recommended hours",
    "importance": "biological importance",
    "tips": ["tip1", "tip2", "tip3"]
  },
  "activity": {
    "title": "Physical Activity",
    "duration": "daily duration",
    "types": ["activity1", "activity2", "activity3"],
    "benefits": "how it helps development"
  },
  "weekly_plan": {
    "monday": "goal for monday",
    "tuesday": "goal for tuesday",
    "wednesday": "goal for wednesday",
    "thursday": "goal for thursday",
    "friday": "goal for friday",
    "saturday": "goal for saturday",
    "sunday": "goal for sunday"
  }
}"#;

/// Build the user-role instruction for one assessment.
pub fn build_guidance_prompt(ctx: &GuidanceContext) -> String {
    let m = &ctx.measurement;
    format!(
        "You are a health educator specializing in adolescent development and biology.\n\
Generate personalized, age-appropriate health guidance for a {age}-year-old {gender} teenager.\n\n\
BMI Information:\n\
- Height: {height} cm\n\
- Weight: {weight} kg\n\
- BMI: {bmi}\n\
- Category: {category}\n\n\
Please provide:\n\n\
1. BIOLOGICAL EXPLANATION (2-3 sentences):\n\
Explain what their BMI category means in terms of adolescent growth and development. Focus on biological processes like growth spurts, hormonal changes, and nutrient needs.\n\n\
2. PERSONALIZED NUTRITION PLAN:\n\
- Daily calorie range appropriate for their age and activity level\n\
- Specific food recommendations for healthy adolescent development\n\
- Foods to emphasize and foods to limit\n\
- Meal timing suggestions\n\n\
3. HYDRATION TIPS:\n\
- Specific daily water intake recommendation\n\
- Why hydration is important for their age group\n\
- Practical tips for staying hydrated\n\n\
4. SLEEP GUIDANCE:\n\
- Recommended sleep hours for their age\n\
- How sleep affects growth hormone release and development\n\
- Tips for better sleep hygiene\n\n\
5. PHYSICAL ACTIVITY PLAN:\n\
- Type and duration of activities suitable for their age\n\
- How exercise supports bone density and muscle development\n\
- Specific activity suggestions they might enjoy\n\n\
6. WEEKLY ACTION PLAN:\n\
Create a simple 7-day action plan with daily goals covering nutrition, hydration, sleep, and activity.\n\n\
Keep everything:\n\
- Age-appropriate and encouraging\n\
- Based on scientific evidence about adolescent development\n\
- Practical and actionable\n\
- Positive in tone (avoid fear-based messaging)\n\
- Educational about the biology behind the recommendations\n\n\
Format your response as JSON with these exact keys:\n{shape}",
        age = m.age,
        gender = m.gender,
        height = m.height_cm,
        weight = m.weight_kg,
        bmi = ctx.bmi.value,
        category = ctx.bmi.category,
        shape = RESPONSE_SHAPE,
    )
}
