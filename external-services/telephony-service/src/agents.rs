use serde::{Deserialize, Serialize};

/// Scripted call flows configured on the voice-agent platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Symptom screening interview
    SymptomScreener,
    /// Medication reminder
    MedReminder,
    /// Post-operative follow-up
    PostopFollowup,
    /// Text chat health bot
    Healthbot,
    /// Appointment booking with the patient
    Appointments,
    /// Booking approval call to the doctor
    DoctorApproval,
}

impl AgentKind {
    pub const ALL: [AgentKind; 6] = [
        AgentKind::SymptomScreener,
        AgentKind::MedReminder,
        AgentKind::PostopFollowup,
        AgentKind::Healthbot,
        AgentKind::Appointments,
        AgentKind::DoctorApproval,
    ];

    /// Environment variable overriding the agent id
    pub fn env_var(self) -> &'static str {
        match self {
            AgentKind::SymptomScreener => "AGENT_ID_SYMPTOM_SCREENER",
            AgentKind::MedReminder => "AGENT_ID_MED_REMINDER",
            AgentKind::PostopFollowup => "AGENT_ID_POSTOP_FOLLOWUP",
            AgentKind::Healthbot => "AGENT_ID_HEALTHBOT",
            AgentKind::Appointments => "AGENT_ID_APPOINTMENTS",
            AgentKind::DoctorApproval => "AGENT_ID_DOCTOR_APPROVAL",
        }
    }

    /// Agent id provisioned for this flow on the platform
    pub fn default_id(self) -> u64 {
        match self {
            AgentKind::SymptomScreener => 3256,
            AgentKind::MedReminder => 3257,
            AgentKind::PostopFollowup => 3258,
            AgentKind::Healthbot => 3259,
            AgentKind::Appointments => 3261,
            AgentKind::DoctorApproval => 3262,
        }
    }
}

/// Agent ids by call flow
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AgentRegistry {
    pub symptom_screener: u64,
    pub med_reminder: u64,
    pub postop_followup: u64,
    pub healthbot: u64,
    pub appointments: u64,
    pub doctor_approval: u64,
}

impl AgentRegistry {
    pub fn id(&self, kind: AgentKind) -> u64 {
        match kind {
            AgentKind::SymptomScreener => self.symptom_screener,
            AgentKind::MedReminder => self.med_reminder,
            AgentKind::PostopFollowup => self.postop_followup,
            AgentKind::Healthbot => self.healthbot,
            AgentKind::Appointments => self.appointments,
            AgentKind::DoctorApproval => self.doctor_approval,
        }
    }

    pub fn set(&mut self, kind: AgentKind, id: u64) {
        let slot = match kind {
            AgentKind::SymptomScreener => &mut self.symptom_screener,
            AgentKind::MedReminder => &mut self.med_reminder,
            AgentKind::PostopFollowup => &mut self.postop_followup,
            AgentKind::Healthbot => &mut self.healthbot,
            AgentKind::Appointments => &mut self.appointments,
            AgentKind::DoctorApproval => &mut self.doctor_approval,
        };
        *slot = id;
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self {
            symptom_screener: AgentKind::SymptomScreener.default_id(),
            med_reminder: AgentKind::MedReminder.default_id(),
            postop_followup: AgentKind::PostopFollowup.default_id(),
            healthbot: AgentKind::Healthbot.default_id(),
            appointments: AgentKind::Appointments.default_id(),
            doctor_approval: AgentKind::DoctorApproval.default_id(),
        }
    }
}
