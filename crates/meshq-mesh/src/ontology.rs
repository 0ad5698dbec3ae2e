//! Built-in MeSH headings.
//!
//! A small compile-time table of common clinical descriptors and their entry
//! terms. Order is preserved so index construction is deterministic.

use phf::phf_ordered_map;

/// Heading → entry terms.
pub static BUILTIN: phf::OrderedMap<&'static str, &'static [&'static str]> = phf_ordered_map! {
    "Myocardial Infarction" => &["Heart Attack", "Myocardial Infarct", "Cardiovascular Stroke"],
    "Heart Failure" => &["Cardiac Failure", "Congestive Heart Failure"],
    "Atrial Fibrillation" => &["Auricular Fibrillation"],
    "Hypertension" => &["High Blood Pressure", "Blood Pressure, High"],
    "Stroke" => &["Cerebrovascular Accident", "CVA", "Brain Vascular Accident"],
    "Diabetes Mellitus" => &["Diabetes"],
    "Diabetes Mellitus, Type 2" => &["Type 2 Diabetes", "NIDDM", "Adult-Onset Diabetes Mellitus"],
    "Obesity" => &["Obese"],
    "Neoplasms" => &["Cancer", "Tumor", "Neoplasm", "Malignancy"],
    "Breast Neoplasms" => &["Breast Cancer", "Breast Tumor"],
    "Lung Neoplasms" => &["Lung Cancer", "Pulmonary Neoplasms"],
    "Asthma" => &["Bronchial Asthma"],
    "Pulmonary Disease, Chronic Obstructive" => &["COPD", "Chronic Obstructive Pulmonary Disease"],
    "COVID-19" => &["SARS-CoV-2 Infection", "2019 Novel Coronavirus Disease", "COVID19"],
    "Influenza, Human" => &["Influenza", "Flu", "Human Flu"],
    "Sepsis" => &["Septicemia", "Blood Poisoning"],
    "Tuberculosis" => &["TB"],
    "HIV Infections" => &["HIV Infection", "Human Immunodeficiency Virus Infection"],
    "Hepatitis C" => &["Hepatitis C Virus Infection"],
    "Malaria" => &["Remittent Fever"],
    "Renal Insufficiency, Chronic" => &["Chronic Kidney Disease", "CKD", "Chronic Renal Insufficiency"],
    "Osteoporosis" => &["Age-Related Bone Loss"],
    "Arthritis, Rheumatoid" => &["Rheumatoid Arthritis"],
    "Alzheimer Disease" => &["Alzheimer's Disease", "Alzheimer Dementia"],
    "Parkinson Disease" => &["Parkinson's Disease", "Paralysis Agitans"],
    "Migraine Disorders" => &["Migraine", "Migraine Headache"],
    "Depressive Disorder" => &["Depression", "Depressive Disorders"],
    "Anxiety Disorders" => &["Anxiety Disorder", "Anxiety Neurosis"],
    "Schizophrenia" => &["Dementia Praecox"],
    "Autism Spectrum Disorder" => &["Autism", "ASD"],
    "Pain" => &["Ache"],
    "Exercise" => &["Physical Activity", "Physical Exercise"],
    "Tobacco Smoking" => &["Smoking", "Cigarette Smoking"],
    "Vaccination" => &["Vaccinations", "Immunization"],
};
