//! Removal of patient-identifying and private attributes.

use dicom::core::Tag;
use dicom::core::dictionary::DataDictionary;
use dicom::object::InMemDicomObject;
use tracing::trace;

/// Attributes stripped from every reconstructed slice.
///
/// The table is static configuration: each entry pairs the tag with its
/// standard keyword for log and report messages. Attributes absent from
/// a data set are simply not removed.
pub const IDENTIFYING_FIELDS: &[(Tag, &str)] = &[
    (Tag(0x0010, 0x0010), "PatientName"),
    (Tag(0x0010, 0x1001), "OtherPatientNames"),
    (Tag(0x0010, 0x1005), "PatientBirthName"),
    (Tag(0x0010, 0x1060), "PatientMotherBirthName"),
    (Tag(0x0010, 0x2297), "ResponsiblePerson"),
    (Tag(0x0008, 0x0090), "ReferringPhysicianName"),
    (Tag(0x0008, 0x1050), "PerformingPhysicianName"),
    (Tag(0x0008, 0x1070), "OperatorsName"),
    (Tag(0x0010, 0x1000), "OtherPatientIDs"),
    (Tag(0x0010, 0x1002), "OtherPatientIDsSequence"),
    (Tag(0x0010, 0x0030), "PatientBirthDate"),
    (Tag(0x0010, 0x0032), "PatientBirthTime"),
    (Tag(0x0010, 0x2160), "EthnicGroup"),
    (Tag(0x0010, 0x2293), "PatientBreedCodeSequence"),
    (Tag(0x0010, 0x2294), "BreedRegistrationSequence"),
    (Tag(0x0010, 0x2295), "BreedRegistrationNumber"),
    (Tag(0x0010, 0x2296), "BreedRegistryCodeSequence"),
    (Tag(0x0010, 0x2202), "PatientSpeciesCodeSequence"),
    (Tag(0x0010, 0x1080), "MilitaryRank"),
    (Tag(0x0010, 0x1081), "BranchOfService"),
    (Tag(0x0010, 0x2180), "Occupation"),
    (Tag(0x0010, 0x0020), "PatientID"),
    (Tag(0x0010, 0x0021), "IssuerOfPatientID"),
    (Tag(0x0010, 0x0022), "TypeOfPatientID"),
    (Tag(0x0010, 0x1090), "MedicalRecordLocator"),
    (Tag(0x0010, 0x21B0), "AdditionalPatientHistory"),
    (Tag(0x0010, 0x21D0), "LastMenstrualDate"),
    (Tag(0x0010, 0x2203), "PatientSexNeutered"),
    (Tag(0x0010, 0x21C0), "PregnancyStatus"),
    (Tag(0x0010, 0x1040), "PatientAddress"),
    (Tag(0x0010, 0x2150), "CountryOfResidence"),
    (Tag(0x0010, 0x2152), "RegionOfResidence"),
    (Tag(0x0010, 0x2154), "PatientTelephoneNumbers"),
    (Tag(0x0010, 0x0050), "PatientInsurancePlanCodeSequence"),
    (Tag(0x0010, 0x1050), "InsurancePlanIdentification"),
    (Tag(0x0010, 0x0101), "PatientPrimaryLanguageCodeSequence"),
    (Tag(0x0010, 0x0102), "PatientPrimaryLanguageModifierCodeSequence"),
    (Tag(0x0010, 0x21F0), "PatientReligiousPreference"),
    (Tag(0x0010, 0x2298), "ResponsiblePersonRole"),
    (Tag(0x0010, 0x2299), "ResponsibleOrganization"),
    (Tag(0x0008, 0x0050), "AccessionNumber"),
    (Tag(0x0008, 0x0080), "InstitutionName"),
];

/// Removes every identifying attribute present on the data set.
///
/// Removing an absent attribute is a no-op. Returns the number of
/// attributes actually removed.
pub fn strip_identifying_fields<D>(dataset: &mut InMemDicomObject<D>) -> usize
where
    D: DataDictionary + Clone,
{
    let mut removed = 0;
    for (tag, keyword) in IDENTIFYING_FIELDS {
        if dataset.remove_element(*tag) {
            trace!(keyword, "removed identifying attribute");
            removed += 1;
        }
    }
    removed
}

/// Removes every private (odd-group) attribute from the data set.
///
/// Returns the number of attributes removed.
pub fn strip_private_tags<D>(dataset: &mut InMemDicomObject<D>) -> usize
where
    D: DataDictionary + Clone,
{
    let private: Vec<Tag> = (&*dataset)
        .into_iter()
        .map(|element| element.header().tag)
        .filter(|tag| tag.group() % 2 == 1)
        .collect();
    for tag in &private {
        dataset.remove_element(*tag);
    }
    private.len()
}
