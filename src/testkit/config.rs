//! Canonical scenario and configuration documents.

/// The sample project from [`super::domain`] as a scenario file.
pub const SAMPLE_SCENARIO: &str = r#"
[financials]
current_expenses = 100000
invoices_received = 20000
store_stock_value = 10000

[lengths]
min_length = 4
max_length = 16

[shared]
asphalt_cost = 90
bedding_cost = 30

[water]
pipe_cost_25 = 12
pipe_cost_32 = 15
meter_cost_25 = 300
meter_cost_32 = 420

[sewer]
pipe_cost = 40

[monthly]
direct = 60000
indirect = 25000

[probabilities]
prob_water = 50
prob_25mm = 70
prob_mainline = 60

[mode]
connection_rate = 30
"#;

/// Application config that pins every setting away from its default.
pub const SAMPLE_CONFIG: &str = r#"
[logging]
level = "error"
format = "pretty"

[solver]
max_connection_rate = 40
anchor_date = "2026-01-01"

[report]
currency = "USD"
curve_max_points = 100

[project]
name = "Test Author"
company = "Acme Contracting"
"#;
