//! Government document-type catalog
//!
//! The twelve identification categories accepted by the tax authority,
//! addressed by their fixed two-digit wire codes.

/// Document type for the intake form, identified by its government code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    /// 11 - Registro civil
    CivilRegistry,
    /// 12 - Tarjeta de identidad
    IdentityCard,
    /// 13 - Cédula de ciudadanía
    CitizenId,
    /// 21 - Tarjeta de extranjería
    ForeignerCard,
    /// 22 - Cédula de extranjería
    ForeignerId,
    /// 31 - NIT
    TaxId,
    /// 41 - Pasaporte
    Passport,
    /// 42 - Documento de identificación extranjero
    ForeignIdDocument,
    /// 47 - PEP (Permiso Especial de Permanencia)
    SpecialStayPermit,
    /// 48 - PPT (Permiso Protección Temporal)
    TemporaryProtectionPermit,
    /// 50 - NIT de otro país
    ForeignTaxId,
    /// 91 - NUIP
    UnifiedId,
}

/// All document types in wire-code order, for the select field
pub const ALL_DOCUMENT_TYPES: [DocumentType; 12] = [
    DocumentType::CivilRegistry,
    DocumentType::IdentityCard,
    DocumentType::CitizenId,
    DocumentType::ForeignerCard,
    DocumentType::ForeignerId,
    DocumentType::TaxId,
    DocumentType::Passport,
    DocumentType::ForeignIdDocument,
    DocumentType::SpecialStayPermit,
    DocumentType::TemporaryProtectionPermit,
    DocumentType::ForeignTaxId,
    DocumentType::UnifiedId,
];

impl DocumentType {
    /// Two-digit code used on both webhook payloads
    pub fn code(&self) -> &'static str {
        match self {
            Self::CivilRegistry => "11",
            Self::IdentityCard => "12",
            Self::CitizenId => "13",
            Self::ForeignerCard => "21",
            Self::ForeignerId => "22",
            Self::TaxId => "31",
            Self::Passport => "41",
            Self::ForeignIdDocument => "42",
            Self::SpecialStayPermit => "47",
            Self::TemporaryProtectionPermit => "48",
            Self::ForeignTaxId => "50",
            Self::UnifiedId => "91",
        }
    }

    /// Human-readable label, as shown in the select field and on the
    /// submission payload (`tipoDocumentoTexto`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::CivilRegistry => "Registro civil",
            Self::IdentityCard => "Tarjeta de identidad",
            Self::CitizenId => "Cédula de ciudadanía",
            Self::ForeignerCard => "Tarjeta de extranjería",
            Self::ForeignerId => "Cédula de extranjería",
            Self::TaxId => "NIT",
            Self::Passport => "Pasaporte",
            Self::ForeignIdDocument => "Documento de identificación extranjero",
            Self::SpecialStayPermit => "PEP (Permiso Especial de Permanencia)",
            Self::TemporaryProtectionPermit => "PPT (Permiso Protección Temporal)",
            Self::ForeignTaxId => "NIT de otro país",
            Self::UnifiedId => "NUIP",
        }
    }

    /// Document-type code of the downstream accounting system
    /// (`documentoID_Odoo`); only three categories have a mapping there
    pub fn odoo_code(&self) -> Option<i32> {
        match self {
            Self::CitizenId => Some(3),
            Self::TaxId => Some(6),
            Self::Passport => Some(7),
            _ => None,
        }
    }

    /// Next entry in the catalog (wraps around), for the select field
    pub fn next(&self) -> Self {
        let idx = ALL_DOCUMENT_TYPES.iter().position(|t| t == self).unwrap_or(0);
        ALL_DOCUMENT_TYPES[(idx + 1) % ALL_DOCUMENT_TYPES.len()]
    }

    /// Previous entry in the catalog (wraps around)
    pub fn prev(&self) -> Self {
        let idx = ALL_DOCUMENT_TYPES.iter().position(|t| t == self).unwrap_or(0);
        let len = ALL_DOCUMENT_TYPES.len();
        ALL_DOCUMENT_TYPES[(idx + len - 1) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_twelve_codes_present() {
        let codes: Vec<&str> = ALL_DOCUMENT_TYPES.iter().map(|t| t.code()).collect();
        assert_eq!(
            codes,
            vec!["11", "12", "13", "21", "22", "31", "41", "42", "47", "48", "50", "91"]
        );
    }

    #[test]
    fn test_odoo_mapping() {
        assert_eq!(DocumentType::CitizenId.odoo_code(), Some(3));
        assert_eq!(DocumentType::TaxId.odoo_code(), Some(6));
        assert_eq!(DocumentType::Passport.odoo_code(), Some(7));
        for t in ALL_DOCUMENT_TYPES {
            if !matches!(
                t,
                DocumentType::CitizenId | DocumentType::TaxId | DocumentType::Passport
            ) {
                assert_eq!(t.odoo_code(), None);
            }
        }
    }

    #[test]
    fn test_next_cycles_through_catalog() {
        let mut t = DocumentType::CivilRegistry;
        for _ in 0..ALL_DOCUMENT_TYPES.len() {
            t = t.next();
        }
        assert_eq!(t, DocumentType::CivilRegistry);
    }

    #[test]
    fn test_prev_is_inverse_of_next() {
        for t in ALL_DOCUMENT_TYPES {
            assert_eq!(t.next().prev(), t);
        }
    }

    #[test]
    fn test_tax_id_label() {
        assert_eq!(DocumentType::TaxId.label(), "NIT");
    }
}
