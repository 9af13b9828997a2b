/// Every piece of text the CLI prints to the operator.
///
/// Variants carry the dynamic parts; the wording lives in the `Display`
/// implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ReadingConfig(String),
    WritingConfig(String),
    ConfigSaved,
    UsingProfile(String),
    UsingDefaultProfile,

    // === PROFILE MESSAGES ===
    ProfilesHeader,
    ProfileHeader(String),
    NoProfilesToRemove,
    SelectProfileToRemove,
    ConfirmRemoveProfile(String),
    ProfileRemovalCancelled,
    ProfileRemoved(String),
    ProfileRenamedToDefault(String),

    // === SETUP MESSAGES ===
    SetupHeader,
    ConfigExists,
    SetupChoiceOverwriteDefault,
    SetupChoiceNewProfile,
    PromptProfileName,
    WillOverwriteDefault,
    WillCreateProfile(String),
    PromptEmail,
    PromptPassword,
    FetchingUsers,
    UsingUser(String),
    SelectUser,
    FetchingClients,
    ChooseClient,
    ChooseProject,
    FetchingPlanningEvents,
    UsingPlanningEvent(String),
    ChoosePlanningEvent,
    FetchingCategories,
    IncludeCategory(String),
    SelectedCategories(String),
    NoCategoriesSelected,
    PromptWorkStart,
    PromptWorkEnd,
    SetupSummary {
        profile: String,
        user: String,
        client: String,
        project: String,
        categories: Option<String>,
        work_hours: String,
    },
    SetupCompleted,

    // === SESSION MESSAGES ===
    LoggingIn,
    LoginSuccessful,

    // === LIST MESSAGES ===
    FetchingEvents(String),
    NoEventsFound,
    EventsFound { total: usize, work: usize, absence: usize },
    EventsTotal { total: usize, work: usize, absence: usize },
    HoursTotal { work: String, absence: String },
    NoAbsencesFound,

    // === WORKLOG MESSAGES ===
    UsingConfigClient(String),
    ChooseClientForProject,
    ConfigClientNotOffered(String),
    EndNotAfterStart,
    CreatingEvent {
        user: String,
        client: String,
        project: String,
        time: String,
        date: String,
        message: String,
    },
    EventCreated,

    // === ABSENCE MESSAGES ===
    FetchingAbsenceOptions,
    SelectAbsence,
    UsingAbsence(String),
    PromptAbsenceMessage,
    PromptSingleOrMultiple,
    SingleDay,
    MultipleDays,
    PromptHalfOrFullDay,
    HalfDay,
    FullDay,
    PromptHalfOfDay,
    FirstHalfOfDay,
    SecondHalfOfDay,
    PromptStartDay,
    PromptEndDay,
    PromptAbsenceStartTime,
    PromptDurationHours,
    InvalidDurationHours(String),
    CreatingAbsence,
    AbsenceCreated,

    // === CANCEL MESSAGES ===
    NoAbsencesToCancel,
    SelectAbsenceToCancel,
    ConfirmCancelAbsence,
    AbsenceCancelled,
    NoWorklogsToCancel,
    SelectWorklogToCancel,
    ConfirmCancelWorklog,
    WorklogCancelled,
    ActionAborted,

    // === ERROR MESSAGES ===
    NothingToChoose(String),
}
