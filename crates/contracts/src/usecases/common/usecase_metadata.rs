/// Метаданные UseCase для идентификации и документирования
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u001")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "upload_pdf")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI (например, "Upload New PDF")
    fn display_name() -> &'static str;

    /// HTTP path of the backend endpoint serving the UseCase
    fn endpoint() -> &'static str;

    /// Описание UseCase
    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u001_upload_pdf"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
