pub mod classification;
pub mod decision;
pub mod patient;
pub mod record;
pub mod report;
pub mod vitals;

pub use classification::{VitalClassification, VitalStatus};
pub use decision::{Decision, MatchSet, RuleMatch};
pub use patient::PatientState;
pub use record::{DecisionRecord, FeedbackDecision, FeedbackRecord};
pub use report::{
    AggregateReport, FeedbackTally, LevelDistribution, LevelEntry, LevelListing, LevelShare,
    LevelSummary, Provenance,
};
pub use vitals::{
    DistressLevel, GlucoseSymptom, PainDuration, PainLocation, VitalName, VitalValue, Vitals,
};
