/// Build the SOAP extraction prompt for a consultation transcript.
pub fn build_soap_prompt(transcript: &str) -> String {
    format!(
        "Extract structured SOAP medical info from the transcript below.\n\
IMPORTANT: Do not shorten or reduce the Subjective section. Include the transcript fully in Subjective, but organize other fields properly.\n\
Return valid JSON ONLY with these keys:\n\
- subjective\n\
- objective\n\
- assessment\n\
- plan\n\
- extracted_entities\n\
\n\
Transcript: \"\"\"{transcript}\"\"\""
    )
}
